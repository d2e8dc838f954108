//! ratatui-based UI.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use cards_application::controls::{NEXT_LABEL, PREVIOUS_LABEL};
use cards_application::{Navigator, Phase, Shell, SwipeIntent, VisualSide};
use cards_core::{CardDeck, LayoutDirection, Settings};
use cards_engine::CardImages;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::Protocol as ImageProtocol;
use ratatui_image::{Image as ImageWidget, Resize};
use unicode_width::UnicodeWidthStr;

mod card_view;
mod contact;
mod copy;
mod image_protocol;

const ACCENT: Color = Color::Cyan;
const IDLE_TICK: Duration = Duration::from_millis(250);
const FRAME_TICK: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// How much of the card to draw for a given opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fade {
    Full,
    Dim,
    Hidden,
}

impl Fade {
    fn from_opacity(opacity: f32) -> Self {
        if opacity >= 0.999 {
            Fade::Full
        } else if opacity >= 0.34 {
            Fade::Dim
        } else {
            Fade::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Previous,
    Next,
    Dot(usize),
    Contact,
}

/// Outbound links the UI can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Contact,
    Greeting,
}

/// Clickable regions from the last frame.
#[derive(Debug, Clone, Default)]
struct HitMap {
    card: Option<Rect>,
    previous: Option<Rect>,
    next: Option<Rect>,
    dots: Vec<(usize, Rect)>,
    contact: Option<Rect>,
    welcome_button: Option<Rect>,
    welcome_link: Option<Rect>,
}

impl HitMap {
    fn target_at(&self, col: u16, row: u16) -> Option<HitTarget> {
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| rect_contains(r, col, row));
        if hit(self.previous) {
            return Some(HitTarget::Previous);
        }
        if hit(self.next) {
            return Some(HitTarget::Next);
        }
        if let Some((index, _)) = self.dots.iter().find(|(_, r)| rect_contains(*r, col, row)) {
            return Some(HitTarget::Dot(*index));
        }
        if hit(self.contact) {
            return Some(HitTarget::Contact);
        }
        None
    }
}

struct CardImageState {
    index: usize,
    area: Rect,
    protocol: Option<ImageProtocol>,
}

pub struct Ui {
    deck: CardDeck,
    settings: Settings,
    navigator: Navigator,
    shell: Shell,
    images: CardImages,
    image_picker: Picker,
    cell_width_px: i32,
    card_image: Option<CardImageState>,
    shown_index: Option<usize>,
    scroll: u16,
    max_scroll: u16,
    hits: HitMap,
    notice: Option<String>,
    contact_url: String,
    greeting_url: String,
    opener: fn(&str) -> anyhow::Result<()>,
    now: Instant,
}

impl Ui {
    pub fn new(deck: CardDeck, settings: Settings) -> Self {
        Self::mounted_at(deck, settings, Instant::now())
    }

    fn mounted_at(deck: CardDeck, mut settings: Settings, now: Instant) -> Self {
        settings.normalize();
        let navigator = Navigator::new(deck.len(), &settings);
        let shell = Shell::mount(
            now,
            settings.show_welcome,
            Duration::from_millis(settings.reveal_delay_ms),
        );
        let images = CardImages::new(&settings.asset_root);
        let image_picker = Picker::halfblocks();
        let cell_width_px = image_protocol::cell_width_px(&image_picker);
        Self {
            deck,
            settings,
            navigator,
            shell,
            images,
            image_picker,
            cell_width_px,
            card_image: None,
            shown_index: None,
            scroll: 0,
            max_scroll: 0,
            hits: HitMap::default(),
            notice: None,
            contact_url: contact::contact_url(copy::CONTACT_NUMBER, copy::CONTACT_MESSAGE),
            greeting_url: contact::contact_url(copy::CONTACT_NUMBER, copy::WELCOME_MESSAGE),
            opener: contact::open_link,
            now,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        self.image_picker =
            image_protocol::detect_picker(image_protocol::TerminalHints::from_env());
        self.cell_width_px = image_protocol::cell_width_px(&self.image_picker);
        self.card_image = None;
        tracing::info!(
            protocol = image_protocol::protocol_label(&self.image_picker),
            cell_width_px = self.cell_width_px,
            "terminal ready"
        );
        terminal.clear().ok();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.event_loop(&mut terminal)
        }));
        let restore_result = restore_terminal(&mut terminal);

        match (result, restore_result) {
            (Ok(Ok(())), Ok(())) => Ok(()),
            (Ok(Err(err)), _) => Err(err),
            (Ok(Ok(())), Err(err)) => Err(err),
            (Err(panic), Ok(())) => Err(anyhow::anyhow!(panic_to_string(panic))),
            (Err(panic), Err(err)) => Err(anyhow::anyhow!(
                "{}\n(additionally failed to restore terminal: {err})",
                panic_to_string(panic)
            )),
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let mut needs_redraw = true;

        loop {
            if self.tick(Instant::now()) || self.is_animating() {
                needs_redraw = true;
            }

            if needs_redraw {
                terminal.draw(|frame| self.draw(frame.area(), frame))?;
                needs_redraw = false;
            }

            if !event::poll(self.poll_timeout(Instant::now()))? {
                continue;
            }

            match event::read()? {
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    needs_redraw = true;
                    if self.handle_key(key, Instant::now()) == Flow::Quit {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    needs_redraw = true;
                    self.handle_mouse(mouse, Instant::now());
                }
                _ => {}
            }
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        let shell_changed = self.shell.tick(now);
        let nav_changed = self.navigator.tick(now);
        shell_changed || nav_changed
    }

    fn is_animating(&self) -> bool {
        matches!(
            self.navigator.phase(),
            Phase::FadingOut { .. } | Phase::FadingIn { .. }
        )
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let deadline = match (self.navigator.next_deadline(), self.shell.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        let until_deadline = deadline
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or(IDLE_TICK)
            .min(IDLE_TICK);
        if self.is_animating() {
            until_deadline.min(FRAME_TICK)
        } else {
            until_deadline
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return Flow::Quit;
        }

        if self.shell.welcome_active() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.shell.dismiss_welcome(now),
                KeyCode::Char('w') => self.open_link(Link::Greeting),
                _ => {}
            }
            return Flow::Continue;
        }

        let direction = self.settings.direction;
        match key.code {
            KeyCode::Left => self
                .navigator
                .apply(SwipeIntent::from_side(VisualSide::Left, direction), now),
            KeyCode::Right => self
                .navigator
                .apply(SwipeIntent::from_side(VisualSide::Right, direction), now),
            KeyCode::Char('n') | KeyCode::PageDown => self.navigator.go_to_next(now),
            KeyCode::Char('p') | KeyCode::PageUp => self.navigator.go_to_previous(now),
            KeyCode::Home => self.navigator.go_to(0, now),
            KeyCode::End => self.navigator.go_to(self.deck.len().saturating_sub(1), now),
            KeyCode::Char(c @ '1'..='9') => {
                self.navigator.go_to(c as usize - '1' as usize, now);
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            KeyCode::Char('c') => self.open_link(Link::Contact),
            KeyCode::Char('d') => {
                self.settings.toggle_direction();
                self.navigator.set_direction(self.settings.direction);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (col, row) = (mouse.column, mouse.row);

        if self.shell.welcome_active() {
            if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                return;
            }
            let hit = |rect: Option<Rect>| rect.is_some_and(|r| rect_contains(r, col, row));
            if hit(self.hits.welcome_button) {
                self.shell.dismiss_welcome(now);
            } else if hit(self.hits.welcome_link) {
                self.open_link(Link::Greeting);
            }
            return;
        }

        let x = i32::from(col).saturating_mul(self.cell_width_px);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hits.target_at(col, row) {
                    self.activate(target, now);
                } else if self.hits.card.is_some_and(|r| rect_contains(r, col, row)) {
                    self.navigator.touch_start(x);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.navigator.touch_move(x),
            MouseEventKind::Up(MouseButton::Left) => self.navigator.touch_end(now),
            _ => {}
        }
    }

    fn activate(&mut self, target: HitTarget, now: Instant) {
        if target == HitTarget::Contact {
            self.open_link(Link::Contact);
            return;
        }
        let Some(controls) = self.navigator.controls() else {
            return;
        };
        match target {
            HitTarget::Previous if controls.previous.enabled => self.navigator.go_to_previous(now),
            HitTarget::Next if controls.next.enabled => self.navigator.go_to_next(now),
            HitTarget::Dot(index) => {
                if controls
                    .indicators
                    .iter()
                    .any(|dot| dot.index == index && dot.enabled)
                {
                    self.navigator.go_to(index, now);
                }
            }
            _ => {}
        }
    }

    fn open_link(&mut self, link: Link) {
        let url = match link {
            Link::Contact => &self.contact_url,
            Link::Greeting => &self.greeting_url,
        };
        match (self.opener)(url) {
            Ok(()) => self.notice = None,
            Err(err) => {
                tracing::warn!(?link, error = %format!("{err:#}"), "failed to open link");
                self.notice = Some(format!("could not open link: {url}"));
            }
        }
    }

    fn text_alignment(&self) -> Alignment {
        match self.settings.direction {
            LayoutDirection::Rtl => Alignment::Right,
            LayoutDirection::Ltr => Alignment::Left,
        }
    }

    fn draw(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        frame.render_widget(Clear, area);
        self.hits = HitMap::default();

        if self.shell.welcome_active() {
            if self.shell.welcome_visible() {
                self.draw_welcome(area, frame);
            }
            return;
        }

        if !self.shell.app_visible() {
            return;
        }

        if self.deck.is_empty() {
            self.draw_empty(area, frame);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(5),
            ])
            .split(area);

        self.draw_header(layout[0], frame);
        self.draw_card(layout[1], frame);
        self.draw_controls(layout[2], frame);
        self.draw_footer(layout[3], frame);
    }

    fn draw_header(&self, area: Rect, frame: &mut ratatui::Frame) {
        let header = Paragraph::new(Text::from(vec![
            Line::from(Span::styled(
                copy::APP_TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::raw(copy::APP_SUBTITLE),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn draw_card(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let Some(index) = self.navigator.current_index() else {
            return;
        };
        if self.shown_index != Some(index) {
            self.shown_index = Some(index);
            self.scroll = 0;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}/{} ", index + 1, self.deck.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.card = Some(area);

        let fade = Fade::from_opacity(self.navigator.opacity(self.now));
        if fade == Fade::Hidden {
            return;
        }

        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Min(0)])
            .split(inner);

        self.draw_card_image(index, split[0], fade, frame);

        let Some(card) = self.deck.get(index) else {
            return;
        };
        let mut text = card_view::card_text(card, ACCENT);
        if fade == Fade::Dim {
            text = text.patch_style(Style::default().add_modifier(Modifier::DIM));
        }
        self.max_scroll =
            card_view::wrapped_height(&text, split[1].width).saturating_sub(split[1].height);
        self.scroll = self.scroll.min(self.max_scroll);
        let body = Paragraph::new(text)
            .alignment(self.text_alignment())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(body, split[1]);
    }

    fn ensure_card_image(&mut self, index: usize, area: Rect) {
        if self
            .card_image
            .as_ref()
            .is_some_and(|state| state.index == index && state.area == area)
        {
            return;
        }

        let protocol = self.deck.get(index).and_then(|card| {
            let image = self.images.image(card).ok()?;
            self.image_picker
                .new_protocol((*image).clone(), area, Resize::Fit(None))
                .map_err(|err| {
                    tracing::debug!(card = %card.id, error = %err, "image protocol failed")
                })
                .ok()
        });
        self.card_image = Some(CardImageState {
            index,
            area,
            protocol,
        });
    }

    fn draw_card_image(
        &mut self,
        index: usize,
        area: Rect,
        fade: Fade,
        frame: &mut ratatui::Frame,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.ensure_card_image(index, area);

        let protocol = self
            .card_image
            .as_ref()
            .and_then(|state| state.protocol.as_ref());
        match protocol {
            Some(protocol) => {
                if fade != Fade::Full {
                    return;
                }
                let proto_area = protocol.area();
                let draw_width = proto_area.width.min(area.width);
                let draw_height = proto_area.height.min(area.height);
                let draw_area = Rect::new(
                    area.x + area.width.saturating_sub(draw_width) / 2,
                    area.y + area.height.saturating_sub(draw_height) / 2,
                    draw_width,
                    draw_height,
                );
                frame.render_widget(ImageWidget::new(protocol), draw_area);
            }
            None => {
                let placeholder =
                    card_view::image_placeholder(area.width, area.height, copy::IMAGE_UNAVAILABLE);
                let style = match fade {
                    Fade::Dim => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                    _ => Style::default().fg(Color::Gray),
                };
                frame.render_widget(Paragraph::new(placeholder).style(style), area);
            }
        }
    }

    fn draw_controls(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let Some(controls) = self.navigator.controls() else {
            return;
        };
        let direction = self.settings.direction;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let (previous_label, next_label) = match direction {
            LayoutDirection::Rtl => (format!("{PREVIOUS_LABEL} ›"), format!("‹ {NEXT_LABEL}")),
            LayoutDirection::Ltr => (format!("‹ {PREVIOUS_LABEL}"), format!("{NEXT_LABEL} ›")),
        };

        for (intent, label, enabled) in [
            (
                SwipeIntent::Previous,
                previous_label,
                controls.previous.enabled,
            ),
            (SwipeIntent::Next, next_label, controls.next.enabled),
        ] {
            let label = format!(" {label} ");
            let width = (UnicodeWidthStr::width(label.as_str()) as u16).min(rows[0].width);
            let x = match intent.side(direction) {
                VisualSide::Left => rows[0].x,
                VisualSide::Right => rows[0].x + rows[0].width.saturating_sub(width),
            };
            let rect = Rect::new(x, rows[0].y, width, 1);
            let style = if enabled {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            match intent {
                SwipeIntent::Previous => self.hits.previous = Some(rect),
                SwipeIntent::Next => self.hits.next = Some(rect),
            }
        }

        let count = controls.indicators.len();
        if count == 0 {
            return;
        }
        let dots_row = rows[1];
        let total_width = (count * 2 - 1).min(usize::from(u16::MAX)) as u16;
        let start_x = dots_row.x + dots_row.width.saturating_sub(total_width) / 2;
        for indicator in &controls.indicators {
            let slot = if direction.is_rtl() {
                count - 1 - indicator.index
            } else {
                indicator.index
            };
            let Ok(offset) = u16::try_from(slot * 2) else {
                continue;
            };
            let x = start_x.saturating_add(offset);
            if x >= dots_row.x + dots_row.width {
                continue;
            }
            let (symbol, mut style) = if indicator.current {
                (
                    "●",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", Style::default().fg(Color::Gray))
            };
            if !indicator.enabled {
                style = style.add_modifier(Modifier::DIM);
            }
            let rect = Rect::new(x, dots_row.y, 1, 1);
            frame.render_widget(Paragraph::new(Span::styled(symbol, style)), rect);
            self.hits.dots.push((indicator.index, rect));
        }
    }

    fn draw_footer(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let contact_label = format!("↗ {}", copy::CONTACT_LABEL);
        let status = match &self.notice {
            Some(notice) => Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                "←/→ navigate · 1-9 jump · ↑/↓ scroll · d direction · c contact · q quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let lines = vec![
            Line::raw(format!(
                "{} · {}",
                copy::FOOTER_DEDICATION,
                copy::FOOTER_PRAYER
            )),
            Line::from(Span::styled(
                copy::FOOTER_CREDIT,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                contact_label.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            status,
        ];
        frame.render_widget(
            Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
            inner,
        );

        if inner.height > 2 {
            let width = (UnicodeWidthStr::width(contact_label.as_str()) as u16).min(inner.width);
            self.hits.contact = Some(Rect::new(
                inner.x + inner.width.saturating_sub(width) / 2,
                inner.y + 2,
                width,
                1,
            ));
        }
    }

    fn draw_empty(&self, area: Rect, frame: &mut ratatui::Frame) {
        let popup = centered_rect(80, 40, area);
        let text = Text::from(vec![
            Line::from(Span::styled(
                copy::EMPTY_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw(copy::EMPTY_MESSAGE),
        ]);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }

    fn draw_welcome(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let popup = centered_rect(70, 50, area);
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let text = Text::from(vec![
            Line::from(Span::styled(
                copy::WELCOME_TITLE,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw(copy::WELCOME_GREETING),
            Line::raw(copy::WELCOME_BLESSING),
            Line::raw(""),
            Line::from(Span::styled(
                copy::WELCOME_AUTHOR,
                Style::default().fg(ACCENT),
            )),
        ]);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[0],
        );

        let link = format!("↗ {}", copy::WELCOME_LINK_LABEL);
        let link_width = (UnicodeWidthStr::width(link.as_str()) as u16).min(rows[1].width);
        if rows[1].height > 0 && link_width > 0 {
            let rect = Rect::new(
                rows[1].x + rows[1].width.saturating_sub(link_width) / 2,
                rows[1].y,
                link_width,
                1,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(
                    link,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                rect,
            );
            self.hits.welcome_link = Some(rect);
        }

        let label = format!("  {}  ", copy::WELCOME_BUTTON);
        let width = (UnicodeWidthStr::width(label.as_str()) as u16).min(area.width);
        let y = popup.y.saturating_add(popup.height).saturating_add(1);
        if y >= area.y + area.height {
            return;
        }
        let rect = Rect::new(area.x + area.width.saturating_sub(width) / 2, y, width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            rect,
        );
        self.hits.welcome_button = Some(rect);

        let notice_y = y.saturating_add(2);
        if let Some(notice) = &self.notice
            && notice_y < area.y + area.height
        {
            let notice = Span::styled(notice.clone(), Style::default().fg(Color::Yellow));
            frame.render_widget(
                Paragraph::new(notice).alignment(Alignment::Center),
                Rect::new(area.x, notice_y, area.width, 1),
            );
        }
    }
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alt screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode().context("disable raw mode")?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leave alt screen")?;
    Ok(())
}

fn panic_to_string(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic: (unknown payload)".to_string()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    let x_end = rect.x.saturating_add(rect.width);
    let y_end = rect.y.saturating_add(rect.height);
    col >= rect.x && col < x_end && row >= rect.y && row < y_end
}

//! Test helpers and fixtures.

use cards_core::{CardDeck, CardRecord, LayoutDirection, Settings};

pub fn make_card(id: usize, image_url: Option<&str>) -> CardRecord {
    CardRecord {
        id: id.to_string(),
        title: format!("Card {id}"),
        description: format!("Description {id} (source {id})"),
        evidence: format!("Evidence {id}"),
        question: format!("Question {id}?"),
        image_url: image_url.map(str::to_string),
    }
}

pub fn make_deck(n: usize) -> CardDeck {
    CardDeck::new((1..=n).map(|id| make_card(id, None)).collect())
}

pub fn make_settings(direction: LayoutDirection) -> Settings {
    Settings {
        direction,
        ..Settings::default()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use cards_application::{Navigator, Phase, SwipeIntent};
    use cards_config::{ConfigFile, apply_env_overrides};
    use cards_engine::CardImages;

    const LATER: Duration = Duration::from_secs(1);

    fn settle(nav: &mut Navigator, now: Instant) -> Instant {
        let later = now + LATER;
        nav.tick(later);
        later
    }

    #[test]
    fn builds_fixtures() {
        let deck = make_deck(3);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0).map(|c| c.title.as_str()), Some("Card 1"));
    }

    #[test]
    fn builtin_deck_drives_a_full_lap() -> anyhow::Result<()> {
        let deck = CardDeck::builtin()?;
        let settings = Settings::default();
        let mut nav = Navigator::new(deck.len(), &settings);

        let mut now = Instant::now();
        let mut seen = Vec::new();
        for _ in 0..deck.len() {
            let index = nav.current_index().unwrap_or(usize::MAX);
            seen.push(deck.get(index).map(|c| c.id.clone()));
            nav.go_to_next(now);
            now = settle(&mut nav, now);
        }
        assert_eq!(nav.phase(), Phase::Idle { index: 0 });
        let ids: Vec<_> = deck.iter().map(|c| Some(c.id.clone())).collect();
        assert_eq!(seen, ids);
        Ok(())
    }

    #[test]
    fn configured_direction_flips_swipes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"direction":"ltr"}"#)?;
        let mut settings = ConfigFile::new(&path).load()?.settings;

        let deck = make_deck(4);
        let now = Instant::now();
        let mut nav = Navigator::new(deck.len(), &settings);
        nav.touch_start(300);
        nav.touch_move(100);
        nav.touch_end(now);
        assert!(matches!(nav.phase(), Phase::FadingOut { target: 1, .. }));

        apply_env_overrides(&mut settings, |key| {
            (key == cards_config::ENV_DIRECTION).then(|| "rtl".to_string())
        });
        let mut nav = Navigator::new(deck.len(), &settings);
        nav.touch_start(300);
        nav.touch_move(100);
        nav.touch_end(now);
        assert!(matches!(nav.phase(), Phase::FadingOut { target: 3, .. }));
        Ok(())
    }

    #[test]
    fn swipe_intent_while_fading_out_is_dropped() {
        let deck = make_deck(3);
        let settings = make_settings(LayoutDirection::Ltr);
        let mut nav = Navigator::new(deck.len(), &settings);
        let now = Instant::now();

        nav.apply(SwipeIntent::Next, now);
        nav.apply(SwipeIntent::Next, now);
        assert!(matches!(nav.phase(), Phase::FadingOut { target: 1, .. }));
        settle(&mut nav, now);
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn one_broken_image_leaves_the_rest_of_the_deck_intact() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("2.png"), b"broken")?;
        image::RgbaImage::new(2, 2).save(dir.path().join("1.png"))?;
        image::RgbaImage::new(2, 2).save(dir.path().join("3.png"))?;

        let deck = CardDeck::new(vec![
            make_card(1, Some("/1.png")),
            make_card(2, Some("/2.png")),
            make_card(3, Some("/3.png")),
        ]);
        let images = CardImages::new(dir.path());
        let loaded: Vec<bool> = deck.iter().map(|card| images.image(card).is_ok()).collect();
        assert_eq!(loaded, vec![true, false, true]);
        Ok(())
    }
}

//! Fixed-language interface text.

pub(crate) const APP_TITLE: &str = "إبراهيم والذبيح";
pub(crate) const APP_SUBTITLE: &str = "قصة الإيمان والطاعة";

pub(crate) const QUESTION_HEADING: &str = "سؤال للتفكر";
pub(crate) const IMAGE_UNAVAILABLE: &str = "الصورة غير متوفرة";

pub(crate) const EMPTY_TITLE: &str = "بطاقات التوعية";
pub(crate) const EMPTY_MESSAGE: &str =
    "لا توجد بطاقات متاحة في الوقت الحالي. يرجى التحقق مرة أخرى لاحقًا.";

pub(crate) const FOOTER_DEDICATION: &str = "صدقة جارية 🎁 - ذِكرى لِلذّاكِرينَ";
pub(crate) const FOOTER_PRAYER: &str = "نسألكم الدعـاء 🤲";
pub(crate) const FOOTER_CREDIT: &str = "تطوير: أحمد كريز";
pub(crate) const CONTACT_LABEL: &str = "تواصل عبر واتساب";

pub(crate) const CONTACT_NUMBER: &str = "966590065162";
pub(crate) const CONTACT_MESSAGE: &str =
    "السلام عليكم، اطلعت على تطبيق قصة إبراهيم والذبيح، عمل رائع! لدي بعض الملاحظات أو الاستفسارات.";

pub(crate) const WELCOME_TITLE: &str = "عِيدُ أَضْحَى مُبَارَكٌ";
pub(crate) const WELCOME_GREETING: &str = "كل عام وأنتم بخير وصحة وسعادة";
pub(crate) const WELCOME_BLESSING: &str = "تَقَبَّلَ اللَّهُ مِنَّا وَمِنْكُمْ صَالِحَ الْأَعْمَالِ";
pub(crate) const WELCOME_AUTHOR: &str = "أحمد كريز";
pub(crate) const WELCOME_LINK_LABEL: &str = "معايدة واتساب 🎉";
pub(crate) const WELCOME_MESSAGE: &str =
    "عيد أضحى مبارك! كل عام وأنتم بخير وصحة وسعادة. تقبل اللّٰه منا ومنكم صالح الأعمال. أعجبني جداً طريقة المعايدة الجديدة 😘";
pub(crate) const WELCOME_BUTTON: &str = "يلا بينا للقصة";

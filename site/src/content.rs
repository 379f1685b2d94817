//! Fixed site content: conference facts, news entries, navigation and
//! share links.
//!
//! Single source of truth for everything the page states about the 2018
//! conference. Sections read from here instead of hardcoding strings so
//! a date or venue correction lands in one place.

/// Conference name, also the document title.
pub const CONF_TITLE: &str = "Mercari Tech Conf 2018";

/// Date line shown in the hero visual.
pub const CONF_DATE_LABEL: &str = "2018.10.4 thu. 10:00 - 18:00";

/// Venue (English).
pub const CONF_VENUE: &str = "Roppongi Academyhills 49";

/// Venue (Japanese).
pub const CONF_VENUE_JA: &str = "六本木アカデミーヒルズ49";

/// Venue street address (English).
pub const CONF_VENUE_ADDRESS: &str =
    "49F Roppongi Hills Mori Tower, 6-10-1 Roppongi, Minato-ku, Tokyo";

/// Venue street address (Japanese).
pub const CONF_VENUE_ADDRESS_JA: &str = "東京都港区六本木6-10-1 六本木ヒルズ森タワー49階";

/// About-section lead (English).
pub const ABOUT_TEXT: &str = "Mercari Tech Conf is a conference where engineers of the \
Mercari Group share the technology that powers our services and the challenges ahead. \
The theme for 2018 is \"Evolution\": how our products, our architecture, and our \
organization keep evolving together.";

/// About-section lead (Japanese).
pub const ABOUT_TEXT_JA: &str = "Mercari Tech Confは、メルカリグループのエンジニアが、\
サービスを支える技術とこれからの挑戦を紹介するカンファレンスです。\
2018年のテーマは「Evolution」。プロダクト、アーキテクチャ、組織の進化をお伝えします。";

/// Facebook share dialog for the page.
pub const FACEBOOK_SHARE_URL: &str =
    "http://www.facebook.com/share.php?u=https://techconf.mercari.com/2018/";

/// Tweet composer preloaded with the page URL and hashtag.
pub const TWITTER_SHARE_URL: &str =
    "https://twitter.com/share?url=https://techconf.mercari.com/2018/&hashtags=mtc18";

/// Map link shown in the access section.
pub const VENUE_MAP_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=Roppongi+Hills+Mori+Tower";

/// In-page navigation, label and anchor, header order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("NEWS", "#news"),
    ("ABOUT", "#about"),
    ("CONTENTS", "#contents"),
    ("ACCESS", "#access"),
];

/// A dated announcement shown in the news section.
pub struct NewsItem {
    /// Display date, `2018.08.09` style
    pub date: &'static str,
    /// Announcement text (English)
    pub message: &'static str,
    /// Announcement text (Japanese)
    pub message_ja: &'static str,
    /// Optional link target for the whole entry
    pub link: Option<&'static str>,
}

/// News entries, newest first.
pub const NEWS: &[NewsItem] = &[
    NewsItem {
        date: "2018.09.21",
        message: "Session information has been published.",
        message_ja: "セッション情報を公開しました。",
        link: None,
    },
    NewsItem {
        date: "2018.08.27",
        message: "Ticket sales have started.",
        message_ja: "チケットの販売を開始しました。",
        link: Some("https://mercari-techconf-2018.peatix.com/"),
    },
    NewsItem {
        date: "2018.08.09",
        message: "The Mercari Tech Conf 2018 website is now open.",
        message_ja: "Mercari Tech Conf 2018のWebサイトを公開しました。",
        link: None,
    },
];

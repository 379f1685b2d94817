//! CSS for the conference page.
//!
//! One constant with the complete stylesheet. The static renderer inlines
//! it into `<head>`, the browser bundle mounts it as a `<style>` element,
//! so both render paths style identically with no asset pipeline.
//!
//! # Customization
//!
//! ```rust
//! use mtc2018_site::styles::SITE_CSS;
//!
//! let extra = ".content-card { border-width: 2px; }";
//! let combined = format!("{}\n{}", SITE_CSS, extra);
//! # assert!(combined.contains("border-width"));
//! ```

/// Complete CSS for the page - deep navy theme over the hero visual.
///
/// Covers:
/// - Base typography and the section rhythm
/// - Fixed header, transparent over the hero, filled past the fold
/// - Hero visual, news, about, content cards, timetable, access, footer
/// - Single-column layout under 768px (the timetable hides there)
pub const SITE_CSS: &str = r#"
:root {
    --navy: #121c3b;
    --navy-translucent: rgba(18, 28, 59, 0.8);
    --navy-bright: #1b2a59;
    --yuki: #ffffff;
    --sumi: #333333;
    --gray: #8491b7;
    --line: #d8dce8;
    --accent: #ff4f64;
    --section-gap: 160px;
    --header-height: 80px;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: "Hiragino Kaku Gothic ProN", "Noto Sans JP", -apple-system, sans-serif;
    color: var(--sumi);
    background-color: var(--yuki);
    line-height: 1.8;
}

img {
    max-width: 100%;
}

a {
    color: inherit;
}

/* ---- Fixed header ---------------------------------------------------- */

.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    display: flex;
    align-items: center;
    height: var(--header-height);
    padding: 0 40px;
    color: var(--yuki);
    background-color: transparent;
    transition: background-color 300ms;
    z-index: 50;
}

.header--filled {
    background-color: var(--navy-translucent);
}

.header-logo {
    display: flex;
    align-items: center;
    font-weight: 700;
    letter-spacing: 0.04em;
    text-decoration: none;
}

.header-logo img {
    height: 32px;
}

.header-space {
    flex-grow: 1;
}

.header-nav {
    display: flex;
    align-items: center;
}

.header-link {
    margin-left: 24px;
    font-size: 14px;
    letter-spacing: 0.08em;
    line-height: 36px;
    text-decoration: none;
    position: relative;
}

.header-link:before {
    content: '';
    position: absolute;
    left: 50%;
    bottom: 0;
    width: 0%;
    height: 1px;
    transform: translateX(-50%);
    background-color: var(--yuki);
    transition-duration: 300ms;
}

.header-link:hover:before {
    width: 70%;
}

.header-sns {
    display: flex;
    align-items: center;
    margin-left: 40px;
}

.header-sns-icon {
    display: inline-flex;
    width: 40px;
    height: 40px;
    align-items: center;
    justify-content: center;
    margin-left: 12px;
}

.header-sns-icon:first-child {
    margin-left: 0;
}

/* ---- Hero ------------------------------------------------------------ */

.main-visual {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    color: var(--yuki);
    background: linear-gradient(160deg, var(--navy) 0%, var(--navy-bright) 60%, #2c3e77 100%);
    text-align: center;
}

.main-visual-title {
    font-size: 56px;
    font-weight: 700;
    letter-spacing: 0.06em;
    margin-bottom: 24px;
}

.main-visual-date {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    font-size: 20px;
    margin-bottom: 8px;
}

.main-visual-venue {
    font-size: 16px;
    color: var(--gray);
}

/* ---- Section rhythm -------------------------------------------------- */

.body {
    width: 100%;
    padding: 32px 64px 64px;
}

.body > * {
    margin-bottom: var(--section-gap);
}

.body > *:last-child {
    margin-bottom: 0;
}

.section {
    max-width: 1080px;
    margin-left: auto;
    margin-right: auto;
    scroll-margin-top: var(--header-height);
}

.section-title {
    font-size: 32px;
    letter-spacing: 0.12em;
    color: var(--navy);
    margin-bottom: 40px;
}

/* ---- News ------------------------------------------------------------ */

.news-list {
    list-style: none;
}

.news-item {
    display: flex;
    gap: 24px;
    padding: 12px 0;
    border-bottom: 1px solid var(--line);
}

.news-date {
    flex-shrink: 0;
    color: var(--gray);
    font-feature-settings: "tnum";
}

.news-message {
    text-decoration: none;
}

a.news-message:hover {
    color: var(--accent);
}

/* ---- About ----------------------------------------------------------- */

.about-lead {
    max-width: 720px;
    margin-bottom: 32px;
}

.about-facts {
    list-style: none;
}

.about-fact {
    display: flex;
    gap: 24px;
    padding: 8px 0;
}

.about-fact-label {
    flex-shrink: 0;
    width: 88px;
    color: var(--gray);
    letter-spacing: 0.08em;
}

/* ---- Content cards --------------------------------------------------- */

.content-list {
    display: flex;
    flex-direction: column;
    gap: 64px;
}

.content-card {
    border: 1px solid var(--line);
    border-radius: 4px;
    padding: 32px 40px;
    scroll-margin-top: var(--header-height);
}

.content-card-header {
    margin-bottom: 16px;
}

.content-card-time {
    color: var(--gray);
    font-feature-settings: "tnum";
    margin-right: 16px;
}

.content-card-type {
    display: inline-block;
    font-size: 12px;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    color: var(--accent);
    border: 1px solid var(--accent);
    border-radius: 2px;
    padding: 0 8px;
}

.content-card-title {
    font-size: 24px;
    color: var(--navy);
    margin: 8px 0;
}

.content-card-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    list-style: none;
    color: var(--gray);
    font-size: 13px;
}

.content-card-outline {
    margin-bottom: 32px;
}

.content-card-speakers {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.speaker {
    display: flex;
    width: 100%;
}

.speaker-photo {
    width: 200px;
    height: 200px;
    flex-shrink: 0;
    border-radius: 4px;
    margin-right: 40px;
    object-fit: cover;
    background-color: var(--line);
}

.speaker-profile {
    width: 100%;
}

.speaker-head {
    margin-bottom: 16px;
}

.speaker-name {
    display: block;
    font-size: 20px;
    font-weight: 700;
    color: var(--navy);
    margin-bottom: 4px;
}

.speaker-position {
    color: var(--gray);
    font-size: 14px;
}

.speaker-sns {
    display: inline-flex;
    gap: 8px;
    margin-left: 12px;
    vertical-align: middle;
    color: var(--gray);
}

.speaker-sns-link:hover {
    color: var(--accent);
}

/* ---- Timetable ------------------------------------------------------- */

.timetable {
    width: 100%;
    border-collapse: collapse;
}

.timetable th {
    text-align: left;
    font-size: 13px;
    letter-spacing: 0.08em;
    color: var(--gray);
    padding: 8px 16px;
    border-bottom: 2px solid var(--navy);
}

.timetable td {
    padding: 16px;
    border-bottom: 1px solid var(--line);
    vertical-align: top;
}

.timetable-time {
    white-space: nowrap;
    font-feature-settings: "tnum";
    color: var(--gray);
}

.timetable-title {
    color: var(--navy);
    font-weight: 600;
}

/* ---- Access ---------------------------------------------------------- */

.access-venue {
    font-size: 20px;
    font-weight: 700;
    color: var(--navy);
    margin-bottom: 8px;
}

.access-address {
    margin-bottom: 16px;
}

.access-map-link {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    color: var(--accent);
    text-decoration: none;
}

.access-map-link:hover {
    text-decoration: underline;
}

/* ---- Footer ---------------------------------------------------------- */

.footer {
    background-color: var(--navy);
    color: var(--yuki);
    padding: 48px 64px;
}

.footer-inner {
    max-width: 1080px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.footer-sns {
    display: flex;
    gap: 16px;
}

.footer-sns a {
    color: var(--yuki);
}

.footer-sns a:hover {
    color: var(--accent);
}

.footer-copyright {
    font-size: 13px;
    color: var(--gray);
}

/* ---- Icons ----------------------------------------------------------- */

.icon-sm {
    width: 18px;
    height: 18px;
}

/* ---- Narrow screens -------------------------------------------------- */

@media screen and (max-width: 767px) {
    .body {
        padding: 32px 8px;
    }

    .body > * {
        margin-bottom: 80px;
    }

    .header {
        padding: 0 16px;
    }

    .header-link {
        margin-left: 12px;
        font-size: 12px;
    }

    .header-sns {
        display: none;
    }

    .main-visual-title {
        font-size: 32px;
    }

    .content-card {
        padding: 24px 16px;
    }

    .speaker {
        flex-direction: column;
        align-items: center;
    }

    .speaker-photo {
        width: 40vw;
        height: 40vw;
        margin-right: 0;
        margin-bottom: 20px;
    }

    .section--timetable {
        display: none;
    }

    .footer-inner {
        flex-direction: column;
        gap: 16px;
    }
}
"#;

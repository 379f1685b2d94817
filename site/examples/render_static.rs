//! Static page generation example.
//!
//! Run with: `cargo run --example render_static`

use mtc2018_site::query::SessionQuery;
use mtc2018_site::render_page;
use mtc2018_site::types::{Session, Speaker};

fn main() {
    // A small programme, the shape the GraphQL API returns
    let sessions = vec![
        Session {
            session_id: 1,
            session_type: "keynote".into(),
            title: "Evolution of Mercari".into(),
            title_ja: "メルカリの進化".into(),
            start_time: "2018-10-04T10:00:00+09:00".into(),
            end_time: "2018-10-04T10:30:00+09:00".into(),
            outline: "Where the marketplace goes next.".into(),
            outline_ja: "マーケットプレイスの次の一手。".into(),
            tags: vec!["go".into(), "microservices".into()],
            speakers: vec![Speaker {
                speaker_id: "yamada_taro".into(),
                name: "Taro Yamada".into(),
                name_ja: "山田太郎".into(),
                company: "Mercari, Inc.".into(),
                position: "Software Engineer".into(),
                position_ja: "ソフトウェアエンジニア".into(),
                profile: "Works on listing infrastructure.".into(),
                profile_ja: "出品基盤を担当。".into(),
                twitter_id: "yamada_taro".into(),
                github_id: "yamada-taro".into(),
                ..Default::default()
            }],
            ..Default::default()
        },
        Session {
            session_id: 2,
            session_type: "session".into(),
            title: "Microservices Platform".into(),
            title_ja: "マイクロサービス基盤".into(),
            start_time: "2018-10-04T11:00:00+09:00".into(),
            end_time: "2018-10-04T11:40:00+09:00".into(),
            tags: vec!["kubernetes".into()],
            ..Default::default()
        },
    ];

    // Render to HTML
    let html = render_page(&SessionQuery::Succeeded(sessions), false);

    // Write to file
    let output_path = "dist/index.html";
    std::fs::create_dir_all("dist").expect("Failed to create dist/");
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}

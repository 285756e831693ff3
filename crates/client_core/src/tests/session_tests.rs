use super::*;
use async_trait::async_trait;

struct StaticSource(&'static str);

#[async_trait]
impl CountrySource for StaticSource {
    async fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        serde_json::from_str(self.0).map_err(|source| LoadError::Decode {
            url: "memory://countries".into(),
            source,
        })
    }
}

const COUNTRIES: &str = r#"[
    {
        "flags": { "png": "https://flagcdn.com/w320/fr.png" },
        "name": { "common": "France" },
        "translations": { "fra": { "common": "France" } },
        "capital": ["Paris"],
        "region": "Europe",
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } }
    },
    {
        "flags": { "png": "https://flagcdn.com/w320/de.png" },
        "name": { "common": "Germany" },
        "translations": { "fra": { "common": "Allemagne" } },
        "capital": ["Berlin"],
        "region": "Europe",
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } }
    },
    {
        "flags": { "png": "https://flagcdn.com/w320/jp.png" },
        "name": { "common": "Japan" },
        "translations": { "fra": { "common": "Japon" } },
        "capital": ["Tokyo"],
        "region": "Asia",
        "currencies": { "JPY": { "name": "Japanese yen", "symbol": "¥" } }
    }
]"#;

async fn session() -> ViewSession {
    ViewSession::load(
        &StaticSource(COUNTRIES),
        NameField::translation("fra"),
        "fra",
    )
    .await
    .expect("load session")
}

fn visible_names(session: &ViewSession) -> Vec<&str> {
    session
        .visible()
        .into_iter()
        .map(Country::common_name)
        .collect()
}

#[tokio::test]
async fn fresh_session_shows_everything() {
    let session = session().await;

    assert_eq!(session.len(), 3);
    assert!(session.criteria().is_unrestricted());
    assert_eq!(visible_names(&session), vec!["France", "Germany", "Japan"]);
    assert_eq!(session.regions(), vec!["Europe", "Asia"]);
}

#[tokio::test]
async fn criteria_changes_refilter_the_snapshot() {
    let mut session = session().await;

    session.set_region(Some("Europe".into()));
    assert_eq!(visible_names(&session), vec!["France", "Germany"]);

    session.set_query("allem");
    assert_eq!(visible_names(&session), vec!["Germany"]);

    session.set_currency(CurrencyCategory::Dollar);
    assert!(session.visible().is_empty());

    session.clear();
    assert_eq!(visible_names(&session), vec!["France", "Germany", "Japan"]);
    assert_eq!(
        session.criteria().name_field,
        NameField::translation("fra")
    );
    assert_eq!(session.len(), 3);
}

#[tokio::test]
async fn empty_region_selection_lifts_restriction() {
    let mut session = session().await;

    session.set_region(Some("Asia".into()));
    assert_eq!(visible_names(&session), vec!["Japan"]);

    session.set_region(Some(String::new()));
    assert_eq!(session.criteria().region, None);
    assert_eq!(session.visible().len(), 3);
}

#[tokio::test]
async fn cards_follow_the_session_name_field() {
    let mut session = session().await;
    session.set_query("jap");

    let cards = session.visible_cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Japon");
    assert_eq!(cards[0].subtitle, "Japan");

    session.set_name_field(NameField::Common);
    assert_eq!(session.visible_cards()[0].title, "Japan");
}

#[tokio::test]
async fn load_failure_propagates() {
    let err = ViewSession::load(&StaticSource("{}"), NameField::Common, "fra")
        .await
        .expect_err("must fail");
    assert!(matches!(err, LoadError::Decode { .. }));
}

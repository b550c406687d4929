use crate::query::{InFlight, QueryState, QueryStore, STALE_TIME};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

pub const DEFAULT_LOGO: &str = "/images/Logo.png";
pub const DEFAULT_DESCRIPTION: &str =
    "후원사에 대한 자세한 설명을 알고싶다면 후원사 로고를 클릭해주세요.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SponsorDetail {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub logo_image: Option<String>,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub desc: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl SponsorDetail {
    pub fn href(&self) -> &str {
        non_empty(&self.url).unwrap_or("")
    }

    pub fn logo_src(&self) -> &str {
        non_empty(&self.logo_image).unwrap_or(DEFAULT_LOGO)
    }

    pub fn description(&self) -> &str {
        non_empty(&self.desc).unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// A sponsor with its identifier, as listed and as seeded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SponsorEntry {
    pub id: String,
    #[serde(flatten)]
    pub detail: SponsorDetail,
}

/// Route-supplied sponsor identifier. A blank segment counts as absent,
/// anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorId(String);

impl SponsorId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn cache_key(&self) -> String {
        format!("sponsorDetail/{}", self.0)
    }
}

impl std::fmt::Display for SponsorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches the detail for `id` into the cache unless there is nothing to do.
///
/// No identifier, a fresh entry or a fetch already in flight for the same
/// key all skip the call. Returns whether `fetch` was called.
pub async fn load_sponsor_detail<S, F, Fut, E>(
    store: &mut S,
    id: Option<SponsorId>,
    now: DateTime<Utc>,
    fetch: F,
) -> bool
where
    S: QueryStore<SponsorDetail>,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<SponsorDetail, E>>,
    E: std::fmt::Display,
{
    let Some(id) = id else {
        return false;
    };
    let key = id.cache_key();
    if !store.update(|cache| cache.needs_fetch(&key, now, STALE_TIME)) {
        return false;
    }

    let in_flight = InFlight::start(store, key);
    let result = fetch(id.as_str().to_string())
        .await
        .map_err(|e| e.to_string());
    in_flight.settle(result, Utc::now());
    true
}

/// What the sponsor detail page shows.
#[derive(Debug, PartialEq)]
pub enum RenderState<'a> {
    Empty,
    Loading,
    Content(&'a SponsorDetail),
}

impl<'a> RenderState<'a> {
    /// Picks the render state for a query snapshot.
    ///
    /// A fetch error is only logged: cached data for the same sponsor is
    /// still rendered.
    pub fn select(query: &'a QueryState<SponsorDetail>) -> Self {
        if query.is_loading() {
            return RenderState::Loading;
        }
        if let Some(e) = &query.error {
            log::error!("Failed to fetch sponsor detail: {}", e);
        }
        match &query.data {
            Some(detail) => RenderState::Content(detail),
            None => RenderState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_minimal() -> SponsorDetail {
        serde_json::from_str(
            r#"{"name": "Acme", "url": "", "logo_image": null, "level": 1, "desc": null}"#,
        )
        .unwrap()
    }

    fn acme_full() -> SponsorDetail {
        SponsorDetail {
            name: "Acme".to_string(),
            url: Some("https://acme.example".to_string()),
            logo_image: Some("https://cdn.example/acme.png".to_string()),
            level: 2,
            desc: Some("Rockets and anvils".to_string()),
        }
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let detail = acme_minimal();
        assert_eq!(detail.name, "Acme");
        assert_eq!(detail.href(), "");
        assert_eq!(detail.logo_src(), "/images/Logo.png");
        assert_eq!(
            detail.description(),
            "후원사에 대한 자세한 설명을 알고싶다면 후원사 로고를 클릭해주세요."
        );
    }

    #[test]
    fn test_populated_fields_are_verbatim() {
        let detail = acme_full();
        assert_eq!(detail.href(), "https://acme.example");
        assert_eq!(detail.logo_src(), "https://cdn.example/acme.png");
        assert_eq!(detail.description(), "Rockets and anvils");
    }

    #[test]
    fn test_missing_optional_keys_deserialize() {
        let detail: SponsorDetail = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert_eq!(detail.url, None);
        assert_eq!(detail.level, 0);
    }

    #[test]
    fn test_entry_flattens_detail() {
        let entry: SponsorEntry =
            serde_json::from_str(r#"{"id": "acme", "name": "Acme", "level": 3}"#).unwrap();
        assert_eq!(entry.id, "acme");
        assert_eq!(entry.detail.name, "Acme");
        assert_eq!(entry.detail.level, 3);
    }

    #[test]
    fn test_sponsor_id_parse() {
        assert_eq!(SponsorId::parse(""), None);
        assert_eq!(SponsorId::parse("   "), None);
        let id = SponsorId::parse("42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.cache_key(), "sponsorDetail/42");
    }

    #[test]
    fn test_sponsor_id_keeps_raw_value() {
        let id = SponsorId::parse(" acme").unwrap();
        assert_eq!(id.as_str(), " acme");
        assert_ne!(id.cache_key(), SponsorId::parse("acme").unwrap().cache_key());
    }

    #[test]
    fn test_render_empty_without_request() {
        let query = QueryState::default();
        assert_eq!(RenderState::select(&query), RenderState::Empty);
    }

    #[test]
    fn test_render_loading_while_first_fetch_pending() {
        let query = QueryState {
            is_fetching: true,
            ..QueryState::default()
        };
        assert_eq!(RenderState::select(&query), RenderState::Loading);
    }

    #[test]
    fn test_render_content() {
        let query = QueryState {
            data: Some(acme_full()),
            ..QueryState::default()
        };
        assert_eq!(RenderState::select(&query), RenderState::Content(&acme_full()));
    }

    #[test]
    fn test_render_cached_data_despite_error() {
        let query = QueryState {
            data: Some(acme_minimal()),
            error: Some("502 Bad Gateway".to_string()),
            ..QueryState::default()
        };
        assert_eq!(
            RenderState::select(&query),
            RenderState::Content(&acme_minimal())
        );
    }

    #[test]
    fn test_render_stale_data_while_refetching() {
        let query = QueryState {
            data: Some(acme_full()),
            is_fetching: true,
            ..QueryState::default()
        };
        assert_eq!(RenderState::select(&query), RenderState::Content(&acme_full()));
    }

    #[test]
    fn test_render_empty_after_error_without_data() {
        let query = QueryState {
            error: Some("not found".to_string()),
            ..QueryState::default()
        };
        assert_eq!(RenderState::select(&query), RenderState::Empty);
    }

    #[cfg(feature = "server")]
    mod loading {
        use super::*;
        use crate::query::QueryCache;
        use std::cell::RefCell;

        fn named(name: &str) -> SponsorDetail {
            SponsorDetail {
                name: name.to_string(),
                url: None,
                logo_image: None,
                level: 1,
                desc: None,
            }
        }

        fn key(id: &str) -> String {
            SponsorId::parse(id).unwrap().cache_key()
        }

        #[tokio::test]
        async fn test_blank_id_never_fetches() {
            let mut cache = QueryCache::default();
            let calls = RefCell::new(Vec::new());
            let fetched = load_sponsor_detail(&mut cache, SponsorId::parse(" "), Utc::now(), |id| {
                calls.borrow_mut().push(id);
                async { Ok::<_, String>(named("Acme")) }
            })
            .await;

            assert!(!fetched);
            assert!(calls.borrow().is_empty());
            assert_eq!(cache, QueryCache::default());
        }

        #[tokio::test]
        async fn test_fresh_entry_is_not_refetched() {
            let mut cache = QueryCache::default();
            let calls = RefCell::new(Vec::new());
            let fetch = |id: String| {
                calls.borrow_mut().push(id);
                async { Ok::<_, String>(named("Acme")) }
            };

            let now = Utc::now();
            assert!(load_sponsor_detail(&mut cache, SponsorId::parse("a"), now, fetch).await);
            let later = now + chrono::Duration::seconds(5);
            assert!(!load_sponsor_detail(&mut cache, SponsorId::parse("a"), later, fetch).await);
            assert_eq!(*calls.borrow(), vec!["a".to_string()]);
        }

        #[tokio::test]
        async fn test_new_id_fetches_under_new_key() {
            let mut cache = QueryCache::default();
            let calls = RefCell::new(Vec::new());
            let fetch = |id: String| {
                calls.borrow_mut().push(id.clone());
                async move { Ok::<_, String>(named(&id)) }
            };

            load_sponsor_detail(&mut cache, SponsorId::parse("a"), Utc::now(), fetch).await;
            load_sponsor_detail(&mut cache, SponsorId::parse("b"), Utc::now(), fetch).await;

            assert_eq!(*calls.borrow(), vec!["a".to_string(), "b".to_string()]);
            assert_eq!(cache.snapshot(&key("a")).data, Some(named("a")));
            assert_eq!(cache.snapshot(&key("b")).data, Some(named("b")));
        }

        #[tokio::test]
        async fn test_failed_refetch_keeps_data() {
            let mut cache = QueryCache::default();
            let now = Utc::now();
            load_sponsor_detail(&mut cache, SponsorId::parse("a"), now, |_| async {
                Ok::<_, String>(named("Acme"))
            })
            .await;

            let stale = now + STALE_TIME + chrono::Duration::seconds(1);
            let fetched = load_sponsor_detail(&mut cache, SponsorId::parse("a"), stale, |_| async {
                Err::<SponsorDetail, _>("502 Bad Gateway")
            })
            .await;

            let state = cache.snapshot(&key("a"));
            assert!(fetched);
            assert_eq!(state.data, Some(named("Acme")));
            assert_eq!(state.error.as_deref(), Some("502 Bad Gateway"));
            assert_eq!(RenderState::select(&state), RenderState::Content(&named("Acme")));
        }

        #[tokio::test]
        async fn test_cancelled_load_does_not_stay_in_flight() {
            let mut cache = QueryCache::default();
            let pending = load_sponsor_detail(&mut cache, SponsorId::parse("a"), Utc::now(), |_| {
                std::future::pending::<Result<SponsorDetail, String>>()
            });
            let timed_out =
                tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;

            assert!(timed_out.is_err());
            assert!(!cache.snapshot(&key("a")).is_fetching);
            assert!(cache.needs_fetch(&key("a"), Utc::now(), STALE_TIME));
        }
    }
}

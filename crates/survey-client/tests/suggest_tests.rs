use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use survey_client::{AddressLookup, QuerySlot, SuggestError, SuggestionProvider};
use survey_model::address::AddressSuggestion;

type CallLog = Arc<Mutex<Vec<String>>>;

/// Provider that echoes the query back as a single suggestion and records
/// which queries actually reached it.
struct EchoProvider {
    calls: CallLog,
}

impl EchoProvider {
    fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        let provider = Self {
            calls: Arc::clone(&calls),
        };
        (provider, calls)
    }
}

#[async_trait]
impl SuggestionProvider for EchoProvider {
    async fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>, SuggestError> {
        self.calls.lock().push(query.to_string());
        Ok(vec![AddressSuggestion::new(query)])
    }
}

struct FailingProvider;

#[async_trait]
impl SuggestionProvider for FailingProvider {
    async fn suggest(&self, _query: &str) -> Result<Vec<AddressSuggestion>, SuggestError> {
        Err(SuggestError("provider down".into()))
    }
}

#[tokio::test]
async fn short_queries_never_reach_the_provider() {
    let (provider, calls) = EchoProvider::new();
    let lookup = AddressLookup::new(provider).with_delay(Duration::from_millis(1));
    assert!(lookup.lookup("ab").await.is_empty());
    assert!(lookup.lookup("  a  ").await.is_empty());
    assert!(calls.lock().is_empty());
}

#[tokio::test]
async fn a_settled_query_returns_its_suggestions() {
    let (provider, _calls) = EchoProvider::new();
    let lookup = AddressLookup::new(provider).with_delay(Duration::from_millis(1));
    let suggestions = lookup.lookup("Lenin St").await;
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].value, "Lenin St");
}

#[tokio::test]
async fn a_newer_query_cancels_the_one_in_flight() {
    let (provider, calls) = EchoProvider::new();
    let lookup = Arc::new(AddressLookup::new(provider).with_delay(Duration::from_millis(40)));

    let first = {
        let lookup = Arc::clone(&lookup);
        tokio::spawn(async move { lookup.lookup("Lenin St").await })
    };
    // let the first lookup enter its debounce window, then supersede it
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = lookup.lookup("Marx St").await;

    assert!(first.await.unwrap().is_empty());
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].value, "Marx St");
    // the superseded query never hit the provider at all
    assert_eq!(*calls.lock(), vec!["Marx St".to_string()]);
}

#[tokio::test]
async fn provider_failure_degrades_to_no_suggestions() {
    let lookup = AddressLookup::new(FailingProvider).with_delay(Duration::from_millis(1));
    assert!(lookup.lookup("Lenin St").await.is_empty());
}

#[tokio::test]
async fn query_slot_tracks_only_the_latest_ticket() {
    let slot = QuerySlot::new();
    let first = slot.begin();
    assert!(slot.is_current(first));

    let second = slot.begin();
    assert!(!slot.is_current(first));
    assert!(slot.is_current(second));
}

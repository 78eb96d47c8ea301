use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::WeatherClient;
use crate::scope::ViewModelScope;
use crate::ui::mvi::Store;
use crate::ui::weather::intent::WeatherIntent;
use crate::ui::weather::reducer::WeatherReducer;
use crate::ui::weather::state::WeatherState;

/// State holder for the weather screen.
pub struct WeatherViewModel {
    store: Store<WeatherReducer>,
    client: WeatherClient,
    scope: ViewModelScope,
}

impl WeatherViewModel {
    pub fn new(client: WeatherClient) -> Self {
        Self {
            store: Store::default(),
            client,
            scope: ViewModelScope::new(),
        }
    }

    pub fn state(&self) -> WeatherState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<WeatherState> {
        self.store.subscribe()
    }

    /// Look up current conditions for `city`.
    ///
    /// Blank input and searches issued while one is pending are ignored.
    pub fn search(&self, city: &str) -> Option<JoinHandle<()>> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        let accepted = self.store.dispatch_if(
            |state| !state.is_loading,
            WeatherIntent::SearchStarted {
                city: city.to_string(),
            },
        );
        if accepted.is_none() {
            tracing::debug!(city = %city, "Search ignored: request already in flight");
            return None;
        }

        let store = self.store.clone();
        let scope = self.scope.handle();
        let client = self.client.clone();
        let city = city.to_string();
        let span = tracing::debug_span!("weather", request_id = %Uuid::new_v4(), city = %city);

        Some(self.scope.launch(
            async move {
                let intent = match client.current(&city).await {
                    Ok(weather) => WeatherIntent::Loaded { weather },
                    Err(err) => {
                        tracing::warn!(error = %err, "Weather lookup failed");
                        WeatherIntent::Failed {
                            message: err.user_message(),
                        }
                    }
                };
                scope.unless_cancelled(|| store.dispatch(intent));
            }
            .instrument(span),
        ))
    }
}

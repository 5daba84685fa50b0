use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    app::events::{AppEvent, RequestId, start_frame_task},
    cli::{Cli, UnitsArg},
    data::{
        ProviderError, WeatherQuery, geoip::GeoipClient, onecall::ExtendedClient,
        openweather::WeatherClient,
    },
    domain::weather::{
        ExtendedConditions, ForecastEntry, Units, WeatherSnapshot, WeatherType, classify,
    },
    ui::{
        particles::ParticleEngine,
        theme::{ColorCapability, Theme, detect_color_capability, resolve_theme},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Default)]
pub struct SearchInput {
    pub active: bool,
    pub buffer: String,
}

/// Controller state: one session of the `Idle -> Loading -> {Ready | Error}`
/// machine, re-entrant into Loading on every new search or location request.
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub units: Units,
    pub search: SearchInput,

    pub snapshot: Option<WeatherSnapshot>,
    pub forecast: Vec<ForecastEntry>,
    pub extended: Option<ExtendedConditions>,
    pub weather_type: WeatherType,

    pub capability: ColorCapability,
    pub particles: ParticleEngine,
    pub last_frame_at: Instant,
    pub frame_tick: u64,

    pub query: Option<WeatherQuery>,
    pub request_seq: RequestId,
    pub active_request: Option<RequestId>,
    in_flight: Option<JoinHandle<()>>,
    pub fetch_in_flight: bool,

    weather_client: WeatherClient,
    extended_client: ExtendedClient,
    geoip_client: GeoipClient,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let units = match cli.units {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        };
        let api_key = cli.resolve_api_key().unwrap_or_default();

        let weather_client = match &cli.weather_url {
            Some(url) => WeatherClient::with_base_url(&api_key, url),
            None => WeatherClient::new(&api_key),
        };
        let extended_client = match &cli.extended_url {
            Some(url) => ExtendedClient::with_base_url(&api_key, url),
            None => ExtendedClient::new(&api_key),
        };

        Self {
            mode: AppMode::Idle,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            units,
            search: SearchInput::default(),
            snapshot: None,
            forecast: Vec::new(),
            extended: None,
            weather_type: WeatherType::Default,
            capability: detect_color_capability(),
            particles: ParticleEngine::new(cli.no_animation, cli.reduced_motion, cli.no_flash),
            last_frame_at: Instant::now(),
            frame_tick: 0,
            query: None,
            request_seq: 0,
            active_request: None,
            in_flight: None,
            fetch_in_flight: false,
            weather_client,
            extended_client,
            geoip_client: GeoipClient::new(),
        }
    }

    /// Theme for the current weather type, quantized to what the terminal
    /// supports. Recomputed from the classifier output on every call, so it
    /// can never go stale against the snapshot.
    pub fn theme(&self) -> Theme {
        resolve_theme(self.weather_type, self.capability)
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(
                    tx.clone(),
                    if cli.reduced_motion {
                        cli.fps.min(20)
                    } else {
                        cli.fps
                    },
                );
                let initial = initial_query(cli);
                self.start_fetch(tx, initial).await?;
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);

                self.particles.update(
                    self.weather_type,
                    self.snapshot.as_ref().map(|s| s.wind_speed),
                    self.snapshot.as_ref().and_then(|s| s.wind_direction),
                    delta,
                );
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted { request } => {
                if Some(request) == self.active_request {
                    self.fetch_in_flight = true;
                    self.loading_message = "Fetching weather...".to_string();
                    if self.snapshot.is_none() {
                        self.mode = AppMode::Loading;
                    }
                }
            }
            AppEvent::PrimaryFetched { request, result } => {
                // Results from a superseded request must never overwrite
                // newer state.
                if Some(request) == self.active_request {
                    self.apply_primary(result);
                }
            }
            AppEvent::ExtendedFetched { request, extended } => {
                if Some(request) == self.active_request && self.snapshot.is_some() {
                    self.extended = extended;
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    fn apply_primary(
        &mut self,
        result: Result<(WeatherSnapshot, Vec<ForecastEntry>), ProviderError>,
    ) {
        self.fetch_in_flight = false;
        match result {
            Ok((snapshot, forecast)) => {
                self.snapshot = Some(snapshot);
                self.forecast = forecast;
                // Fresh extras for this location arrive separately; until
                // then the sections stay absent rather than stale.
                self.extended = None;
                self.last_error = None;
                self.mode = AppMode::Ready;
            }
            Err(err) => {
                self.snapshot = None;
                self.forecast.clear();
                self.extended = None;
                self.last_error = Some(err.to_string());
                self.mode = AppMode::Error;
            }
        }
        self.weather_type = classify(self.snapshot.as_ref());
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.search.active {
                    self.handle_search_key(key.code, tx).await?;
                    return Ok(());
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => {
                        tx.send(AppEvent::Quit).await?;
                    }
                    KeyCode::Char('r') => {
                        let query = self.refresh_query();
                        self.start_fetch(tx, query).await?;
                    }
                    KeyCode::Char('l') => {
                        self.start_fetch(tx, None).await?;
                    }
                    KeyCode::Char('f') => {
                        self.units = Units::Fahrenheit;
                    }
                    KeyCode::Char('c') => {
                        self.units = Units::Celsius;
                    }
                    KeyCode::Char('u') => {
                        self.units = self.units.toggled();
                    }
                    KeyCode::Char('/') | KeyCode::Char('s') => {
                        self.search.active = true;
                        self.search.buffer.clear();
                    }
                    _ => {}
                }
            }
            Event::Resize(_, _) => {
                self.particles.reset();
            }
            _ => {}
        }

        Ok(())
    }

    async fn handle_search_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match code {
            KeyCode::Esc => {
                self.search.active = false;
                self.search.buffer.clear();
            }
            KeyCode::Enter => {
                let city = self.search.buffer.trim().to_string();
                self.search.active = false;
                self.search.buffer.clear();
                // Empty input is a no-op, not an error.
                if !city.is_empty() {
                    self.start_fetch(tx, Some(WeatherQuery::City(city))).await?;
                }
            }
            KeyCode::Backspace => {
                self.search.buffer.pop();
            }
            KeyCode::Char(c) => {
                self.search.buffer.push(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn refresh_query(&self) -> Option<WeatherQuery> {
        self.query.clone().or_else(|| {
            self.snapshot.as_ref().map(|s| WeatherQuery::Coords {
                lat: s.latitude,
                lon: s.longitude,
            })
        })
    }

    /// Kicks off a fetch pipeline for `query`, or an IP-location fix first
    /// when `query` is `None`. Supersedes and aborts any pipeline still in
    /// flight; only events tagged with the new request id will be applied.
    pub async fn start_fetch(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        query: Option<WeatherQuery>,
    ) -> Result<()> {
        self.abort_in_flight();
        self.request_seq += 1;
        let request = self.request_seq;
        self.active_request = Some(request);
        if let Some(query) = &query {
            self.query = Some(query.clone());
        }

        tx.send(AppEvent::FetchStarted { request }).await?;

        let weather = self.weather_client.clone();
        let extended_client = self.extended_client.clone();
        let geoip = self.geoip_client.clone();
        let tx2 = tx.clone();
        let handle = tokio::spawn(async move {
            run_fetch_pipeline(tx2, request, query, weather, extended_client, geoip).await;
        });
        self.in_flight = Some(handle);
        Ok(())
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.active_request = None;
    }
}

fn initial_query(cli: &Cli) -> Option<WeatherQuery> {
    if let Some(city) = &cli.city {
        return Some(WeatherQuery::City(city.clone()));
    }
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Some(WeatherQuery::Coords { lat, lon });
    }
    None
}

async fn run_fetch_pipeline(
    tx: mpsc::Sender<AppEvent>,
    request: RequestId,
    query: Option<WeatherQuery>,
    weather: WeatherClient,
    extended_client: ExtendedClient,
    geoip: GeoipClient,
) {
    let query = match query {
        Some(query) => query,
        None => match geoip.locate().await {
            Some(location) => WeatherQuery::Coords {
                lat: location.latitude,
                lon: location.longitude,
            },
            None => {
                let _ = tx
                    .send(AppEvent::PrimaryFetched {
                        request,
                        result: Err(ProviderError::LocationUnavailable(
                            "could not detect your location; search for a city instead"
                                .to_string(),
                        )),
                    })
                    .await;
                return;
            }
        },
    };

    let snapshot = match weather.fetch_current(&query).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            let _ = tx
                .send(AppEvent::PrimaryFetched {
                    request,
                    result: Err(err),
                })
                .await;
            return;
        }
    };

    // Forecast and extended conditions run concurrently; a dead extended
    // endpoint degrades to the absent state without touching the primary
    // display.
    let (lat, lon) = (snapshot.latitude, snapshot.longitude);
    let (forecast, extended) = tokio::join!(
        weather.fetch_forecast(&query),
        extended_client.fetch(lat, lon)
    );

    match forecast {
        Ok(forecast) => {
            let _ = tx
                .send(AppEvent::PrimaryFetched {
                    request,
                    result: Ok((snapshot, forecast)),
                })
                .await;
            let _ = tx.send(AppEvent::ExtendedFetched { request, extended }).await;
        }
        Err(err) => {
            let _ = tx
                .send(AppEvent::PrimaryFetched {
                    request,
                    result: Err(err),
                })
                .await;
        }
    }
}

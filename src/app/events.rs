use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::interval;

use crate::data::ProviderError;
use crate::domain::weather::{ExtendedConditions, ForecastEntry, WeatherSnapshot};

/// Monotonic token tying every in-flight fetch to the request that started
/// it. Results carrying a superseded token are discarded by the controller.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    FetchStarted {
        request: RequestId,
    },
    PrimaryFetched {
        request: RequestId,
        result: Result<(WeatherSnapshot, Vec<ForecastEntry>), ProviderError>,
    },
    ExtendedFetched {
        request: RequestId,
        extended: Option<ExtendedConditions>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

//! Headless forecast screen: the state a daily-forecast view renders from.
//!
//! Owns the place catalog, the forecast provider, the selection state and the
//! sequence currently on display. Every mutation completes synchronously, so a
//! read after `choose_place` always sees the new sequence.

use serde::Serialize;
use skycast_weather::{
    DateLabels, ExtendedMetrics, ForecastEntry, ForecastProvider, Locale, Place, PlaceCatalog,
};

use crate::selection::{SelectionPolicy, SelectionState};

/// One forecast row, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub date: String,
    pub labels: DateLabels,
    pub max: f32,
    pub min: f32,
    pub real_feel: Option<f32>,
    pub condition: String,
    pub description_key: String,
    pub icon: String,
    pub metrics: Option<ExtendedMetrics>,
    pub expanded: bool,
}

/// Serializable view of the whole screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenSnapshot {
    pub place: String,
    pub places: Vec<String>,
    pub place_list_open: bool,
    pub rows: Vec<ForecastRow>,
}

pub struct ForecastScreen {
    catalog: PlaceCatalog,
    provider: Box<dyn ForecastProvider>,
    selection: SelectionState,
    forecasts: Vec<ForecastEntry>,
    locale: Locale,
    place_list_open: bool,
}

impl ForecastScreen {
    /// Builds the screen and fetches the sequence for the first place.
    pub fn new(
        catalog: PlaceCatalog,
        mut provider: Box<dyn ForecastProvider>,
        policy: SelectionPolicy,
        locale: Locale,
    ) -> Self {
        let forecasts = provider.forecasts_for(catalog.get(0));
        let selection = SelectionState::new(catalog.len(), forecasts.len(), policy);

        tracing::info!(
            "Forecast screen ready with {} places and {} days",
            catalog.len(),
            forecasts.len()
        );

        Self {
            catalog,
            provider,
            selection,
            forecasts,
            locale,
            place_list_open: false,
        }
    }

    pub fn places(&self) -> &[Place] {
        self.catalog.list()
    }

    pub fn selected_place(&self) -> &Place {
        &self.catalog.list()[self.selection.selected_place_index()]
    }

    pub fn forecasts(&self) -> &[ForecastEntry] {
        &self.forecasts
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_place_list_open(&self) -> bool {
        self.place_list_open
    }

    /// Open or close the place chooser list
    pub fn toggle_place_list(&mut self) {
        self.place_list_open = !self.place_list_open;
    }

    /// Select a place and replace the displayed sequence with a fresh fetch.
    /// Returns true if a re-render is needed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a catalog position.
    pub fn choose_place(&mut self, index: usize) -> bool {
        let selection_changed = self.selection.choose_place(index);

        let place = &self.catalog.list()[index];
        let forecasts = self.provider.forecasts_for(Some(place));
        let forecasts_changed = forecasts != self.forecasts;
        self.forecasts = forecasts;
        self.selection.set_entry_count(self.forecasts.len());

        let list_was_open = self.place_list_open;
        self.place_list_open = false;

        tracing::info!("Showing forecast for {}", place.display_name);
        selection_changed || forecasts_changed || list_was_open
    }

    /// Apply a tap on row `index`. Returns true if a re-render is needed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a row of the displayed sequence.
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        self.selection.toggle_expand(index)
    }

    pub fn rows(&self) -> Vec<ForecastRow> {
        self.forecasts
            .iter()
            .enumerate()
            .map(|(i, entry)| self.row(i, entry))
            .collect()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            place: self.selected_place().display_name.clone(),
            places: self
                .places()
                .iter()
                .map(|p| p.display_name.clone())
                .collect(),
            place_list_open: self.place_list_open,
            rows: self.rows(),
        }
    }

    fn row(&self, index: usize, entry: &ForecastEntry) -> ForecastRow {
        let temperature = entry.temperature();
        let weather = entry.weather();
        ForecastRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            labels: entry.labels(self.locale),
            max: temperature.max,
            min: temperature.min,
            real_feel: temperature.real_feel,
            condition: weather.description().to_string(),
            description_key: weather.description_key().to_string(),
            icon: weather.icon_name().to_string(),
            metrics: entry.metrics().cloned(),
            expanded: self.selection.is_expanded(index),
        }
    }
}

// Locale catalogs - localized labels for months, tiers and stats
use crate::domain::dataset::PotentialTier;
use crate::domain::time_slice::TimeSliceKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLabels {
    pub average: String,
    pub maximum: String,
    pub regional_leader: String,
    pub peak_value: String,
    pub p90_index: String,
    pub variability: String,
}

/// One language's string catalog. Month and potential maps are keyed by the
/// dataset's own codes ("ENE".."DIC", "Annual"; "Bajo".."Excelente").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleCatalog {
    pub title: String,
    pub btn_play: String,
    pub btn_pause: String,
    pub btn_stations: String,
    pub init_error: String,
    pub load_error: String,
    pub solar_potential: String,
    pub months: HashMap<String, String>,
    pub potentials: HashMap<String, String>,
    pub stats: StatLabels,
}

impl LocaleCatalog {
    /// Falls back to the raw code so a gap in a catalog never renders blank.
    pub fn month_label(&self, key: TimeSliceKey) -> String {
        self.months
            .get(key.code())
            .cloned()
            .unwrap_or_else(|| key.code().to_string())
    }

    pub fn potential_label(&self, tier: PotentialTier) -> String {
        self.potentials
            .get(tier.code())
            .cloned()
            .unwrap_or_else(|| tier.code().to_string())
    }
}

/// Registry of loaded catalogs with an explicit fallback locale for
/// unrecognized codes.
pub struct Locales {
    catalogs: HashMap<String, LocaleCatalog>,
    fallback: LocaleCatalog,
    fallback_code: String,
}

impl Locales {
    pub fn new(
        catalogs: HashMap<String, LocaleCatalog>,
        fallback_code: &str,
    ) -> anyhow::Result<Self> {
        let fallback = catalogs
            .get(fallback_code)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("fallback locale '{}' is not defined", fallback_code))?;
        Ok(Self {
            catalogs,
            fallback,
            fallback_code: fallback_code.to_string(),
        })
    }

    pub fn fallback_code(&self) -> &str {
        &self.fallback_code
    }

    /// Maps an unrecognized code to the fallback so labels never go undefined.
    pub fn resolve_code<'a>(&'a self, code: &'a str) -> &'a str {
        if self.catalogs.contains_key(code) {
            code
        } else {
            tracing::warn!(
                "unknown locale '{}', falling back to '{}'",
                code,
                self.fallback_code
            );
            &self.fallback_code
        }
    }

    pub fn get(&self, code: &str) -> &LocaleCatalog {
        self.catalogs.get(code).unwrap_or(&self.fallback)
    }
}

pub fn load_locales_config() -> anyhow::Result<HashMap<String, LocaleCatalog>> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/locales"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::time_slice::MONTH_ORDER;

    fn catalog(month_names: [&str; 13], potentials: [&str; 4]) -> LocaleCatalog {
        let mut months = HashMap::new();
        for (month, name) in MONTH_ORDER.iter().zip(month_names) {
            months.insert(month.code().to_string(), name.to_string());
        }
        months.insert("Annual".to_string(), month_names[12].to_string());

        let potentials = ["Bajo", "Moderado", "Alto", "Excelente"]
            .iter()
            .zip(potentials)
            .map(|(code, label)| (code.to_string(), label.to_string()))
            .collect();

        LocaleCatalog {
            title: "Solar Radiation Dashboard".to_string(),
            btn_play: "Play Year".to_string(),
            btn_pause: "Pause".to_string(),
            btn_stations: "Stations".to_string(),
            init_error: "Initialization Error".to_string(),
            load_error: "Error loading resources".to_string(),
            solar_potential: "Solar Potential".to_string(),
            months,
            potentials,
            stats: StatLabels {
                average: "Average".to_string(),
                maximum: "Maximum".to_string(),
                regional_leader: "Regional Leader".to_string(),
                peak_value: "Peak Value".to_string(),
                p90_index: "P90 Index (Guarantee)".to_string(),
                variability: "Nat. Variability".to_string(),
            },
        }
    }

    pub fn english() -> LocaleCatalog {
        catalog(
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
                "Annual Average",
            ],
            ["Low", "Moderate", "High", "Excellent"],
        )
    }

    pub fn spanish() -> LocaleCatalog {
        catalog(
            [
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
                "Promedio Anual",
            ],
            ["Bajo", "Moderado", "Alto", "Excelente"],
        )
    }

    pub fn locales() -> Locales {
        let mut catalogs = HashMap::new();
        catalogs.insert("en".to_string(), english());
        catalogs.insert("es".to_string(), spanish());
        Locales::new(catalogs, "en").unwrap()
    }
}

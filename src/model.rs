use serde::{Deserialize, Serialize};

/// One recommendable place: a beach, a temple or a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    /// Cities are conventionally named `"City, Country"`.
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Destination {
    /// The part of the name after the first comma, if any.
    pub fn region(&self) -> Option<&str> {
        self.name.split_once(',').map(|(_, region)| region)
    }

    /// The part of the name before the first comma (the whole name without one).
    pub fn locality(&self) -> &str {
        self.name
            .split_once(',')
            .map_or(self.name.as_str(), |(locality, _)| locality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<Destination>,
}

/// The recommendation document served by the dataset host.
///
/// Countries are expected in the order Australia, Japan, Brazil. Lookups go
/// by name first, so the order only matters for datasets with unexpected
/// country names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub temples: Vec<Destination>,
    pub beaches: Vec<Destination>,
}

impl Dataset {
    /// Cities of the country called `name`, falling back to `position` when
    /// no country carries that name.
    pub fn cities_of(&self, name: &str, position: usize) -> &[Destination] {
        self.countries
            .iter()
            .find(|country| country.name.eq_ignore_ascii_case(name))
            .or_else(|| self.countries.get(position))
            .map(|country| country.cities.as_slice())
            .unwrap_or_default()
    }
}

//! Supported Vehicle Models

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hyundai/Kia/Genesis models recognised by fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarModel {
    Elantra,
    Genesis,
    KiaOptima,
    KiaSorento,
    KiaStinger,
    SantaFe,
}

impl CarModel {
    /// All known models
    pub const ALL: [CarModel; 6] = [
        CarModel::Elantra,
        CarModel::Genesis,
        CarModel::KiaOptima,
        CarModel::KiaSorento,
        CarModel::KiaStinger,
        CarModel::SantaFe,
    ];

    /// Fingerprint string identifying this model
    pub fn fingerprint(&self) -> &'static str {
        match self {
            CarModel::Elantra => "HYUNDAI ELANTRA LIMITED ULTIMATE 2017",
            CarModel::Genesis => "HYUNDAI GENESIS 2015-2016",
            CarModel::KiaOptima => "KIA OPTIMA SX 2019",
            CarModel::KiaSorento => "KIA SORENTO GT LINE 2018",
            CarModel::KiaStinger => "KIA STINGER GT2 2018",
            CarModel::SantaFe => "HYUNDAI SANTA FE LIMITED 2019",
        }
    }
}

impl fmt::Display for CarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fingerprint())
    }
}

impl FromStr for CarModel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CarModel::ALL
            .iter()
            .copied()
            .find(|model| model.fingerprint().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProfileError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fingerprint() {
        let model: CarModel = "HYUNDAI SANTA FE LIMITED 2019".parse().unwrap();
        assert_eq!(model, CarModel::SantaFe);

        let model: CarModel = "  kia stinger gt2 2018 ".parse().unwrap();
        assert_eq!(model, CarModel::KiaStinger);
    }

    #[test]
    fn test_unknown_fingerprint() {
        let err = "TOYOTA PRIUS 2017".parse::<CarModel>().unwrap_err();
        assert_eq!(err, ProfileError::UnknownModel("TOYOTA PRIUS 2017".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        for model in CarModel::ALL {
            assert_eq!(model.to_string().parse::<CarModel>().unwrap(), model);
        }
    }
}

//! Closed enumeration catalog for survey answer codes
//!
//! Wire codes are the SCREAMING_SNAKE variant names; `label()` carries the
//! neutral display text. Localized UI text lives outside this workspace and
//! is keyed off the codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(code, label)` pair for building option lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    /// Wire code
    pub code: &'static str,
    /// Display text
    pub label: &'static str,
}

/// Error for codes outside a closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {catalog} code: {code}")]
pub struct UnknownCode {
    /// Catalog the lookup ran against
    pub catalog: &'static str,
    /// The offending code
    pub code: String,
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident / $catalog:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the closed set, in catalog order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire code of this member
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Display text of this member
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// `(code, label)` pairs for select/option rendering
            #[must_use]
            pub fn options() -> Vec<CatalogOption> {
                Self::ALL
                    .iter()
                    .map(|member| CatalogOption {
                        code: member.code(),
                        label: member.label(),
                    })
                    .collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownCode {
                        catalog: $catalog,
                        code: code.to_string(),
                    }),
                }
            }
        }
    };
}

catalog_enum! {
    /// Respondent gender
    Gender / "gender" {
        Male = "MALE" => "male",
        Female = "FEMALE" => "female",
    }
}

catalog_enum! {
    /// Respondent social status
    SocialStatus / "social status" {
        Working = "WORKING" => "employed",
        Student = "STUDENT" => "school student",
        UniversityStudent = "UNIVERSITY_STUDENT" => "university student",
        Pensioner = "PENSIONER" => "age pensioner",
        PersonWithDisabilities = "PERSON_WITH_DISABILITIES" => "person with disabilities",
        Unemployed = "UNEMPLOYED" => "unemployed",
        Housewife = "HOUSEWIFE" => "homemaker",
        TemporarilyUnemployed = "TEMPORARILY_UNEMPLOYED" => "temporarily not working (maternity or childcare leave)",
    }
}

catalog_enum! {
    /// Destination category of a trip end
    Place / "place" {
        HomeResidence = "HOME_RESIDENCE" => "home (place of residence)",
        FriendsRelativesHome = "FRIENDS_RELATIVES_HOME" => "home of friends or relatives",
        Workplace = "WORKPLACE" => "work / workplace",
        WorkBusinessTrip = "WORK_BUSINESS_TRIP" => "work - business trip",
        DaycareCenter = "DAYCARE_CENTER" => "daycare center",
        School = "SCHOOL" => "school",
        CollegeTechnicalSchool = "COLLEGE_TECHNICAL_SCHOOL" => "college / technical school",
        UniversityInstitute = "UNIVERSITY_INSTITUTE" => "university / institute",
        HospitalClinic = "HOSPITAL_CLINIC" => "hospital / clinic",
        CulturalInstitution = "CULTURAL_INSTITUTION" => "cultural institution (museum, theater, library)",
        SportFitness = "SPORT_FITNESS" => "sport / fitness",
        StoreMarket = "STORE_MARKET" => "store / market",
        ShoppingEntertainmentCenter = "SHOPPING_ENTERTAINMENT_CENTER" => "shopping and entertainment center",
        RestaurantCafe = "RESTAURANT_CAFE" => "restaurant / cafe / food service",
        Suburb = "SUBURB" => "suburb",
        Other = "OTHER" => "other",
    }
}

catalog_enum! {
    /// Transport mode used within a leg
    TransportMode / "transport mode" {
        Bicycle = "BICYCLE" => "bicycle",
        IndividualMobility = "INDIVIDUAL_MOBILITY" => "personal mobility device (scooter etc.)",
        Bus = "BUS" => "bus",
        ShuttleTaxi = "SHUTTLE_TAXI" => "shuttle taxi",
        Tram = "TRAM" => "tram",
        PrivateCar = "PRIVATE_CAR" => "private car",
        Trolleybus = "TROLLEYBUS" => "trolleybus",
        SuburbanTrain = "SUBURBAN_TRAIN" => "suburban train",
        Metro = "METRO" => "metro",
        Taxi = "TAXI" => "taxi",
        CarSharing = "CAR_SHARING" => "car sharing",
        CityBikeRental = "CITY_BIKE_RENTAL" => "city bike rental",
        Service = "SERVICE" => "company transport",
    }
}

catalog_enum! {
    /// How a leg was travelled
    MovementType / "movement type" {
        OnFoot = "ON_FOOT" => "on foot",
        Transport = "TRANSPORT" => "transport",
    }
}

impl Default for MovementType {
    fn default() -> Self {
        Self::OnFoot
    }
}

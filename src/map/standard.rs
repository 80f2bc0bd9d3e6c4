//! The built-in 48-location world map.
//!
//! Twelve locations per colour. Links are listed once; `MapCatalog` makes
//! them symmetric. Populations are those printed on the location cards and
//! only matter for choosing the first player.

use super::catalog::MapCatalog;
use super::disease::Disease;
use crate::core::error::Result;

use Disease::{Black, Blue, Red, Yellow};

/// Name of the built-in map.
pub const STANDARD_MAP_NAME: &str = "world";

/// Starting location (and first research centre) of the built-in map.
pub const STANDARD_START: &str = "Atlanta";

static LOCATIONS: &[(&str, Disease, u64)] = &[
    // Blue
    ("Atlanta", Blue, 4_715_000),
    ("Chicago", Blue, 9_121_000),
    ("Essen", Blue, 575_000),
    ("London", Blue, 8_586_000),
    ("Madrid", Blue, 5_427_000),
    ("Milan", Blue, 5_232_000),
    ("Montreal", Blue, 3_429_000),
    ("New York", Blue, 20_464_000),
    ("Paris", Blue, 10_755_000),
    ("San Francisco", Blue, 5_864_000),
    ("St. Petersburg", Blue, 4_879_000),
    ("Washington", Blue, 4_679_000),
    // Yellow
    ("Bogota", Yellow, 8_702_000),
    ("Buenos Aires", Yellow, 13_639_000),
    ("Johannesburg", Yellow, 3_888_000),
    ("Khartoum", Yellow, 4_887_000),
    ("Kinshasa", Yellow, 9_046_000),
    ("Lagos", Yellow, 11_547_000),
    ("Lima", Yellow, 9_121_000),
    ("Los Angeles", Yellow, 14_900_000),
    ("Mexico City", Yellow, 19_463_000),
    ("Miami", Yellow, 5_582_000),
    ("Santiago", Yellow, 6_015_000),
    ("Sao Paulo", Yellow, 20_186_000),
    // Black
    ("Algiers", Black, 2_946_000),
    ("Baghdad", Black, 6_204_000),
    ("Cairo", Black, 14_718_000),
    ("Chennai", Black, 8_865_000),
    ("Delhi", Black, 22_242_000),
    ("Istanbul", Black, 13_576_000),
    ("Karachi", Black, 20_711_000),
    ("Kolkata", Black, 14_374_000),
    ("Moscow", Black, 15_512_000),
    ("Mumbai", Black, 16_910_000),
    ("Riyadh", Black, 5_037_000),
    ("Tehran", Black, 7_419_000),
    // Red
    ("Bangkok", Red, 7_151_000),
    ("Beijing", Red, 17_311_000),
    ("Ho Chi Minh City", Red, 8_314_000),
    ("Hong Kong", Red, 7_106_000),
    ("Jakarta", Red, 26_063_000),
    ("Manila", Red, 20_767_000),
    ("Osaka", Red, 2_871_000),
    ("Seoul", Red, 22_547_000),
    ("Shanghai", Red, 13_482_000),
    ("Sydney", Red, 3_785_000),
    ("Taipei", Red, 8_338_000),
    ("Tokyo", Red, 13_189_000),
];

static LINKS: &[(&str, &str)] = &[
    ("San Francisco", "Tokyo"),
    ("San Francisco", "Manila"),
    ("San Francisco", "Los Angeles"),
    ("San Francisco", "Chicago"),
    ("Chicago", "Atlanta"),
    ("Chicago", "Montreal"),
    ("Chicago", "Mexico City"),
    ("Chicago", "Los Angeles"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Montreal", "Washington"),
    ("Montreal", "New York"),
    ("Washington", "New York"),
    ("Washington", "Miami"),
    ("New York", "London"),
    ("New York", "Madrid"),
    ("London", "Madrid"),
    ("London", "Paris"),
    ("London", "Essen"),
    ("Madrid", "Paris"),
    ("Madrid", "Algiers"),
    ("Madrid", "Sao Paulo"),
    ("Paris", "Essen"),
    ("Paris", "Milan"),
    ("Paris", "Algiers"),
    ("Essen", "Milan"),
    ("Essen", "St. Petersburg"),
    ("Milan", "Istanbul"),
    ("St. Petersburg", "Istanbul"),
    ("St. Petersburg", "Moscow"),
    ("Los Angeles", "Mexico City"),
    ("Los Angeles", "Sydney"),
    ("Mexico City", "Miami"),
    ("Mexico City", "Bogota"),
    ("Mexico City", "Lima"),
    ("Miami", "Bogota"),
    ("Bogota", "Lima"),
    ("Bogota", "Buenos Aires"),
    ("Bogota", "Sao Paulo"),
    ("Lima", "Santiago"),
    ("Buenos Aires", "Sao Paulo"),
    ("Sao Paulo", "Lagos"),
    ("Lagos", "Kinshasa"),
    ("Lagos", "Khartoum"),
    ("Kinshasa", "Khartoum"),
    ("Kinshasa", "Johannesburg"),
    ("Johannesburg", "Khartoum"),
    ("Khartoum", "Cairo"),
    ("Algiers", "Istanbul"),
    ("Algiers", "Cairo"),
    ("Istanbul", "Cairo"),
    ("Istanbul", "Baghdad"),
    ("Istanbul", "Moscow"),
    ("Cairo", "Baghdad"),
    ("Cairo", "Riyadh"),
    ("Moscow", "Tehran"),
    ("Baghdad", "Tehran"),
    ("Baghdad", "Karachi"),
    ("Baghdad", "Riyadh"),
    ("Riyadh", "Karachi"),
    ("Tehran", "Karachi"),
    ("Tehran", "Delhi"),
    ("Karachi", "Delhi"),
    ("Karachi", "Mumbai"),
    ("Delhi", "Mumbai"),
    ("Delhi", "Chennai"),
    ("Delhi", "Kolkata"),
    ("Mumbai", "Chennai"),
    ("Chennai", "Kolkata"),
    ("Chennai", "Bangkok"),
    ("Chennai", "Jakarta"),
    ("Kolkata", "Bangkok"),
    ("Kolkata", "Hong Kong"),
    ("Bangkok", "Hong Kong"),
    ("Bangkok", "Ho Chi Minh City"),
    ("Bangkok", "Jakarta"),
    ("Jakarta", "Ho Chi Minh City"),
    ("Jakarta", "Sydney"),
    ("Ho Chi Minh City", "Hong Kong"),
    ("Ho Chi Minh City", "Manila"),
    ("Hong Kong", "Shanghai"),
    ("Hong Kong", "Taipei"),
    ("Hong Kong", "Manila"),
    ("Shanghai", "Beijing"),
    ("Shanghai", "Seoul"),
    ("Shanghai", "Tokyo"),
    ("Shanghai", "Taipei"),
    ("Beijing", "Seoul"),
    ("Seoul", "Tokyo"),
    ("Tokyo", "Osaka"),
    ("Osaka", "Taipei"),
    ("Taipei", "Manila"),
    ("Manila", "Sydney"),
];

/// Build the built-in world map.
pub fn standard_map() -> Result<MapCatalog> {
    let builder = LOCATIONS.iter().fold(
        MapCatalog::builder(STANDARD_MAP_NAME),
        |builder, &(name, disease, population)| builder.location(name, disease, population),
    );
    LINKS
        .iter()
        .fold(builder, |builder, &(a, b)| builder.link(a, b))
        .starting_location(STANDARD_START)
        .build()
}

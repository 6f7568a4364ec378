//! Booking deep links.
//!
//! Maps a chosen route to the operator's booking site. Flights get a
//! prefilled fare-search URL when both cities map to IATA codes; every
//! other case lands on the site's front page.

use chrono::{Local, NaiveDate};

use crate::domain::TransportMode;

/// Where a booking link points and how specific it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLink {
    /// Destination URL.
    pub url: String,

    /// Human-readable site name.
    pub site_name: String,

    /// Whether the URL carries the route's cities and date.
    pub prefilled: bool,
}

/// IATA city/airport code for a known city name.
pub fn airport_code(city: &str) -> Option<&'static str> {
    let code = match city.trim() {
        // Korea
        "서울" => "SEL",
        "인천" => "ICN",
        "김포" => "GMP",
        "부산" => "PUS",
        "제주" => "CJU",
        "대구" => "TAE",
        "광주" => "KWJ",
        "청주" => "CJJ",
        "무안" => "MWX",
        "양양" => "YNY",
        "울산" => "USN",
        "포항" => "KPO",
        "사천" => "HIN",
        "여수" => "RSU",
        "군산" => "KUV",
        "원주" => "WJU",
        // Japan
        "도쿄" => "TYO",
        "오사카" => "OSA",
        "나고야" => "NGO",
        "후쿠오카" => "FUK",
        "삿포로" => "SPK",
        "오키나와" => "OKA",
        "나리타" => "NRT",
        "하네다" => "HND",
        "간사이" => "KIX",
        // China
        "베이징" => "BJS",
        "상하이" => "SHA",
        "광저우" => "CAN",
        "심천" => "SZX",
        "청두" => "CTU",
        "시안" => "XIY",
        // Southeast Asia
        "방콕" => "BKK",
        "싱가포르" => "SIN",
        "타이베이" => "TPE",
        "홍콩" => "HKG",
        "마닐라" => "MNL",
        "하노이" => "HAN",
        "호치민" => "SGN",
        "푸켓" => "HKT",
        "다낭" => "DAD",
        // Rest of world
        "뉴욕" => "NYC",
        "로스앤젤레스" => "LAX",
        "런던" => "LON",
        "파리" => "PAR",
        "프랑크푸르트" => "FRA",
        "시드니" => "SYD",
        _ => return None,
    };
    Some(code)
}

/// Booking link for a route.
///
/// Train routes split on operator: SRT services book at srail.kr,
/// everything else at letskorail.com. Flights between two cities with
/// known IATA codes get a prefilled Naver Flights search for `date`
/// (today when unset); otherwise a generic fare-search site.
pub fn booking_link(
    mode: TransportMode,
    operator: &str,
    departure_city: &str,
    destination_city: &str,
    date: Option<NaiveDate>,
) -> BookingLink {
    match mode {
        TransportMode::Train => {
            if operator.contains("SRT") {
                BookingLink {
                    url: "https://etk.srail.kr".to_string(),
                    site_name: "SRT".to_string(),
                    prefilled: false,
                }
            } else {
                BookingLink {
                    url: "https://www.letskorail.com".to_string(),
                    site_name: "코레일".to_string(),
                    prefilled: false,
                }
            }
        }
        TransportMode::Bus => BookingLink {
            url: "https://www.kobus.co.kr".to_string(),
            site_name: "고속버스통합예매".to_string(),
            prefilled: false,
        },
        TransportMode::Airplane => {
            match (airport_code(departure_city), airport_code(destination_city)) {
                (Some(dep), Some(arr)) => {
                    let date = date.unwrap_or_else(|| Local::now().date_naive());
                    BookingLink {
                        url: format!(
                            "https://flight.naver.com/flights/international/{}-{}-{}?adult=1&isDirect=false",
                            dep,
                            arr,
                            date.format("%y%m%d")
                        ),
                        site_name: "네이버 항공권".to_string(),
                        prefilled: true,
                    }
                }
                _ => BookingLink {
                    url: "https://www.skyscanner.co.kr".to_string(),
                    site_name: "스카이스캐너".to_string(),
                    prefilled: false,
                },
            }
        }
        TransportMode::Ferry => BookingLink {
            url: "https://www.ferry.or.kr".to_string(),
            site_name: "가보고싶은섬".to_string(),
            prefilled: false,
        },
        TransportMode::Car => BookingLink {
            url: "https://www.socar.kr".to_string(),
            site_name: "쏘카".to_string(),
            prefilled: false,
        },
    }
}

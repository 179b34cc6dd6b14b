// crates/countrypick-core/src/catalog.rs
//! # Country catalogs
//!
//! [`EmbeddedCatalog`] ships the ISO 3166-1 region list with English short
//! names and calling codes. [`JsonCatalog`] (feature `json`) reads the same
//! information, plus per-locale names, from a file.

use crate::traits::CountryCatalog;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// (ISO code, English name, calling code). Empty calling code means unknown.
const REGIONS: &[(&str, &str, &str)] = &[
    ("AD", "Andorra", "+376"),
    ("AE", "United Arab Emirates", "+971"),
    ("AF", "Afghanistan", "+93"),
    ("AG", "Antigua & Barbuda", "+1268"),
    ("AI", "Anguilla", "+1264"),
    ("AL", "Albania", "+355"),
    ("AM", "Armenia", "+374"),
    ("AO", "Angola", "+244"),
    ("AQ", "Antarctica", "+672"),
    ("AR", "Argentina", "+54"),
    ("AS", "American Samoa", "+1684"),
    ("AT", "Austria", "+43"),
    ("AU", "Australia", "+61"),
    ("AW", "Aruba", "+297"),
    ("AX", "Åland Islands", "+358"),
    ("AZ", "Azerbaijan", "+994"),
    ("BA", "Bosnia & Herzegovina", "+387"),
    ("BB", "Barbados", "+1246"),
    ("BD", "Bangladesh", "+880"),
    ("BE", "Belgium", "+32"),
    ("BF", "Burkina Faso", "+226"),
    ("BG", "Bulgaria", "+359"),
    ("BH", "Bahrain", "+973"),
    ("BI", "Burundi", "+257"),
    ("BJ", "Benin", "+229"),
    ("BL", "St. Barthélemy", "+590"),
    ("BM", "Bermuda", "+1441"),
    ("BN", "Brunei", "+673"),
    ("BO", "Bolivia", "+591"),
    ("BQ", "Caribbean Netherlands", "+599"),
    ("BR", "Brazil", "+55"),
    ("BS", "Bahamas", "+1242"),
    ("BT", "Bhutan", "+975"),
    ("BV", "Bouvet Island", ""),
    ("BW", "Botswana", "+267"),
    ("BY", "Belarus", "+375"),
    ("BZ", "Belize", "+501"),
    ("CA", "Canada", "+1"),
    ("CC", "Cocos (Keeling) Islands", "+61"),
    ("CD", "Congo - Kinshasa", "+243"),
    ("CF", "Central African Republic", "+236"),
    ("CG", "Congo - Brazzaville", "+242"),
    ("CH", "Switzerland", "+41"),
    ("CI", "Côte d’Ivoire", "+225"),
    ("CK", "Cook Islands", "+682"),
    ("CL", "Chile", "+56"),
    ("CM", "Cameroon", "+237"),
    ("CN", "China", "+86"),
    ("CO", "Colombia", "+57"),
    ("CR", "Costa Rica", "+506"),
    ("CU", "Cuba", "+53"),
    ("CV", "Cape Verde", "+238"),
    ("CW", "Curaçao", "+599"),
    ("CX", "Christmas Island", "+61"),
    ("CY", "Cyprus", "+357"),
    ("CZ", "Czechia", "+420"),
    ("DE", "Germany", "+49"),
    ("DJ", "Djibouti", "+253"),
    ("DK", "Denmark", "+45"),
    ("DM", "Dominica", "+1767"),
    ("DO", "Dominican Republic", "+1809"),
    ("DZ", "Algeria", "+213"),
    ("EC", "Ecuador", "+593"),
    ("EE", "Estonia", "+372"),
    ("EG", "Egypt", "+20"),
    ("EH", "Western Sahara", "+212"),
    ("ER", "Eritrea", "+291"),
    ("ES", "Spain", "+34"),
    ("ET", "Ethiopia", "+251"),
    ("FI", "Finland", "+358"),
    ("FJ", "Fiji", "+679"),
    ("FK", "Falkland Islands", "+500"),
    ("FM", "Micronesia", "+691"),
    ("FO", "Faroe Islands", "+298"),
    ("FR", "France", "+33"),
    ("GA", "Gabon", "+241"),
    ("GB", "United Kingdom", "+44"),
    ("GD", "Grenada", "+1473"),
    ("GE", "Georgia", "+995"),
    ("GF", "French Guiana", "+594"),
    ("GG", "Guernsey", "+44"),
    ("GH", "Ghana", "+233"),
    ("GI", "Gibraltar", "+350"),
    ("GL", "Greenland", "+299"),
    ("GM", "Gambia", "+220"),
    ("GN", "Guinea", "+224"),
    ("GP", "Guadeloupe", "+590"),
    ("GQ", "Equatorial Guinea", "+240"),
    ("GR", "Greece", "+30"),
    ("GS", "South Georgia & South Sandwich Islands", "+500"),
    ("GT", "Guatemala", "+502"),
    ("GU", "Guam", "+1671"),
    ("GW", "Guinea-Bissau", "+245"),
    ("GY", "Guyana", "+592"),
    ("HK", "Hong Kong SAR China", "+852"),
    ("HM", "Heard & McDonald Islands", ""),
    ("HN", "Honduras", "+504"),
    ("HR", "Croatia", "+385"),
    ("HT", "Haiti", "+509"),
    ("HU", "Hungary", "+36"),
    ("ID", "Indonesia", "+62"),
    ("IE", "Ireland", "+353"),
    ("IL", "Israel", "+972"),
    ("IM", "Isle of Man", "+44"),
    ("IN", "India", "+91"),
    ("IO", "British Indian Ocean Territory", "+246"),
    ("IQ", "Iraq", "+964"),
    ("IR", "Iran", "+98"),
    ("IS", "Iceland", "+354"),
    ("IT", "Italy", "+39"),
    ("JE", "Jersey", "+44"),
    ("JM", "Jamaica", "+1876"),
    ("JO", "Jordan", "+962"),
    ("JP", "Japan", "+81"),
    ("KE", "Kenya", "+254"),
    ("KG", "Kyrgyzstan", "+996"),
    ("KH", "Cambodia", "+855"),
    ("KI", "Kiribati", "+686"),
    ("KM", "Comoros", "+269"),
    ("KN", "St. Kitts & Nevis", "+1869"),
    ("KP", "North Korea", "+850"),
    ("KR", "South Korea", "+82"),
    ("KW", "Kuwait", "+965"),
    ("KY", "Cayman Islands", "+1345"),
    ("KZ", "Kazakhstan", "+7"),
    ("LA", "Laos", "+856"),
    ("LB", "Lebanon", "+961"),
    ("LC", "St. Lucia", "+1758"),
    ("LI", "Liechtenstein", "+423"),
    ("LK", "Sri Lanka", "+94"),
    ("LR", "Liberia", "+231"),
    ("LS", "Lesotho", "+266"),
    ("LT", "Lithuania", "+370"),
    ("LU", "Luxembourg", "+352"),
    ("LV", "Latvia", "+371"),
    ("LY", "Libya", "+218"),
    ("MA", "Morocco", "+212"),
    ("MC", "Monaco", "+377"),
    ("MD", "Moldova", "+373"),
    ("ME", "Montenegro", "+382"),
    ("MF", "St. Martin", "+590"),
    ("MG", "Madagascar", "+261"),
    ("MH", "Marshall Islands", "+692"),
    ("MK", "North Macedonia", "+389"),
    ("ML", "Mali", "+223"),
    ("MM", "Myanmar (Burma)", "+95"),
    ("MN", "Mongolia", "+976"),
    ("MO", "Macao SAR China", "+853"),
    ("MP", "Northern Mariana Islands", "+1670"),
    ("MQ", "Martinique", "+596"),
    ("MR", "Mauritania", "+222"),
    ("MS", "Montserrat", "+1664"),
    ("MT", "Malta", "+356"),
    ("MU", "Mauritius", "+230"),
    ("MV", "Maldives", "+960"),
    ("MW", "Malawi", "+265"),
    ("MX", "Mexico", "+52"),
    ("MY", "Malaysia", "+60"),
    ("MZ", "Mozambique", "+258"),
    ("NA", "Namibia", "+264"),
    ("NC", "New Caledonia", "+687"),
    ("NE", "Niger", "+227"),
    ("NF", "Norfolk Island", "+672"),
    ("NG", "Nigeria", "+234"),
    ("NI", "Nicaragua", "+505"),
    ("NL", "Netherlands", "+31"),
    ("NO", "Norway", "+47"),
    ("NP", "Nepal", "+977"),
    ("NR", "Nauru", "+674"),
    ("NU", "Niue", "+683"),
    ("NZ", "New Zealand", "+64"),
    ("OM", "Oman", "+968"),
    ("PA", "Panama", "+507"),
    ("PE", "Peru", "+51"),
    ("PF", "French Polynesia", "+689"),
    ("PG", "Papua New Guinea", "+675"),
    ("PH", "Philippines", "+63"),
    ("PK", "Pakistan", "+92"),
    ("PL", "Poland", "+48"),
    ("PM", "St. Pierre & Miquelon", "+508"),
    ("PN", "Pitcairn Islands", "+64"),
    ("PR", "Puerto Rico", "+1787"),
    ("PS", "Palestinian Territories", "+970"),
    ("PT", "Portugal", "+351"),
    ("PW", "Palau", "+680"),
    ("PY", "Paraguay", "+595"),
    ("QA", "Qatar", "+974"),
    ("RE", "Réunion", "+262"),
    ("RO", "Romania", "+40"),
    ("RS", "Serbia", "+381"),
    ("RU", "Russia", "+7"),
    ("RW", "Rwanda", "+250"),
    ("SA", "Saudi Arabia", "+966"),
    ("SB", "Solomon Islands", "+677"),
    ("SC", "Seychelles", "+248"),
    ("SD", "Sudan", "+249"),
    ("SE", "Sweden", "+46"),
    ("SG", "Singapore", "+65"),
    ("SH", "St. Helena", "+290"),
    ("SI", "Slovenia", "+386"),
    ("SJ", "Svalbard & Jan Mayen", "+47"),
    ("SK", "Slovakia", "+421"),
    ("SL", "Sierra Leone", "+232"),
    ("SM", "San Marino", "+378"),
    ("SN", "Senegal", "+221"),
    ("SO", "Somalia", "+252"),
    ("SR", "Suriname", "+597"),
    ("SS", "South Sudan", "+211"),
    ("ST", "São Tomé & Príncipe", "+239"),
    ("SV", "El Salvador", "+503"),
    ("SX", "Sint Maarten", "+1721"),
    ("SY", "Syria", "+963"),
    ("SZ", "Eswatini", "+268"),
    ("TC", "Turks & Caicos Islands", "+1649"),
    ("TD", "Chad", "+235"),
    ("TF", "French Southern Territories", "+262"),
    ("TG", "Togo", "+228"),
    ("TH", "Thailand", "+66"),
    ("TJ", "Tajikistan", "+992"),
    ("TK", "Tokelau", "+690"),
    ("TL", "Timor-Leste", "+670"),
    ("TM", "Turkmenistan", "+993"),
    ("TN", "Tunisia", "+216"),
    ("TO", "Tonga", "+676"),
    ("TR", "Türkiye", "+90"),
    ("TT", "Trinidad & Tobago", "+1868"),
    ("TV", "Tuvalu", "+688"),
    ("TW", "Taiwan", "+886"),
    ("TZ", "Tanzania", "+255"),
    ("UA", "Ukraine", "+380"),
    ("UG", "Uganda", "+256"),
    ("UM", "U.S. Outlying Islands", "+1"),
    ("US", "United States", "+1"),
    ("UY", "Uruguay", "+598"),
    ("UZ", "Uzbekistan", "+998"),
    ("VA", "Vatican City", "+379"),
    ("VC", "St. Vincent & Grenadines", "+1784"),
    ("VE", "Venezuela", "+58"),
    ("VG", "British Virgin Islands", "+1284"),
    ("VI", "U.S. Virgin Islands", "+1340"),
    ("VN", "Vietnam", "+84"),
    ("VU", "Vanuatu", "+678"),
    ("WF", "Wallis & Futuna", "+681"),
    ("WS", "Samoa", "+685"),
    ("YE", "Yemen", "+967"),
    ("YT", "Mayotte", "+262"),
    ("ZA", "South Africa", "+27"),
    ("ZM", "Zambia", "+260"),
    ("ZW", "Zimbabwe", "+263"),
];

// Upper-cased code -> row in REGIONS. Built once per process.
static REGION_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    REGIONS
        .iter()
        .enumerate()
        .map(|(i, (code, _, _))| (*code, i))
        .collect()
});

fn region(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    REGION_INDEX
        .get(code.trim().to_ascii_uppercase().as_str())
        .map(|&i| &REGIONS[i])
}

/// Built-in catalog of ISO 3166-1 regions.
///
/// Display names are English regardless of the requested locale; localized
/// names come from a [`JsonCatalog`] or a caller-provided [`CountryCatalog`].
///
/// ```rust
/// use countrypick_core::{CountryCatalog, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog;
/// assert_eq!(catalog.display_name("fr", "en").as_deref(), Some("France"));
/// assert_eq!(catalog.dial_code("FR").as_deref(), Some("+33"));
/// assert_eq!(catalog.dial_code("BV"), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedCatalog;

impl CountryCatalog for EmbeddedCatalog {
    fn list_codes(&self, _locale: &str) -> Vec<String> {
        REGIONS.iter().map(|(code, _, _)| (*code).to_owned()).collect()
    }

    fn display_name(&self, code: &str, _locale: &str) -> Option<String> {
        region(code).map(|(_, name, _)| (*name).to_owned())
    }

    fn dial_code(&self, code: &str) -> Option<String> {
        region(code)
            .map(|(_, _, dial)| *dial)
            .filter(|d| !d.is_empty())
            .map(str::to_owned)
    }
}

/// One catalog entry as stored in a JSON catalog file:
///
/// ```json
/// { "code": "DE", "dial_code": "+49", "name": "Germany",
///   "names": { "de": "Deutschland", "fr": "Allemagne" } }
/// ```
#[cfg(feature = "json")]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    #[serde(default)]
    pub dial_code: Option<String>,
    /// Fallback name used when `names` has no entry for the locale.
    #[serde(default)]
    pub name: Option<String>,
    /// Locale tag ("de", "pt_BR") -> display name.
    #[serde(default)]
    pub names: HashMap<String, String>,
}

#[cfg(feature = "json")]
impl CatalogEntry {
    fn name_for(&self, locale: &str) -> Option<&str> {
        let locale = locale.trim();
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        self.names
            .get(locale)
            .or_else(|| self.names.get(language))
            .map(String::as_str)
            .or(self.name.as_deref())
    }
}

/// Catalog backed by a list of [`CatalogEntry`] values, usually read with
/// [`JsonCatalog::load_from_path`].
#[cfg(feature = "json")]
#[derive(Clone, Debug, Default)]
pub struct JsonCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

#[cfg(feature = "json")]
impl JsonCatalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            // First entry wins for duplicated codes.
            index.entry(e.code.trim().to_ascii_uppercase()).or_insert(i);
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn entry(&self, code: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.entries[i])
    }

    // Codes in file order, duplicates removed.
    fn index_order(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, e)| self.index.get(&e.code.trim().to_ascii_uppercase()) == Some(i))
            .map(|(_, e)| e.code.trim().to_owned())
            .collect()
    }
}

#[cfg(feature = "json")]
impl CountryCatalog for JsonCatalog {
    fn list_codes(&self, _locale: &str) -> Vec<String> {
        self.index_order()
    }

    fn display_name(&self, code: &str, locale: &str) -> Option<String> {
        self.entry(code)?.name_for(locale).map(str::to_owned)
    }

    fn dial_code(&self, code: &str) -> Option<String> {
        self.entry(code)?
            .dial_code
            .as_deref()
            .map(crate::phone::normalize_dial_code)
            .filter(|d| !d.is_empty())
    }
}

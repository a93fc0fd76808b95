//! ISO 4217 currency metadata.
//!
//! One table decides how many decimal places a currency has. JPY (0) and
//! KWD (3) must never silently default to 2 outside the `_safe` lookups.

use serde::Serialize;

use super::error::{MoneyError, MoneyResult};

/// Exponent assumed by lenient lookups when a code is unknown.
pub const DEFAULT_EXPONENT: u32 = 2;

/// One row of the ISO 4217 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// Alphabetic code, e.g. `"USD"`.
    pub code: &'static str,
    /// Numeric code, e.g. `840`.
    pub numeric: u16,
    /// Minor-unit exponent (digits after the decimal point).
    pub digits: u32,
    /// English currency name.
    pub name: &'static str,
}

impl CurrencyInfo {
    const fn new(code: &'static str, numeric: u16, digits: u32, name: &'static str) -> Self {
        Self {
            code,
            numeric,
            digits,
            name,
        }
    }
}

/// Entry for a currency picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    /// Alphabetic code.
    pub code: &'static str,
    /// `"<CODE> - <name>"`.
    pub label: String,
    /// English currency name.
    pub name: &'static str,
    /// Minor-unit exponent.
    pub digits: u32,
}

/// Active ISO 4217 currencies, sorted by code.
///
/// Precious metals and testing codes (XAU, XTS, XXX, ...) have no minor unit
/// and are left out.
static ISO_4217: &[CurrencyInfo] = &[
    CurrencyInfo::new("AED", 784, 2, "UAE Dirham"),
    CurrencyInfo::new("AFN", 971, 2, "Afghani"),
    CurrencyInfo::new("ALL", 8, 2, "Lek"),
    CurrencyInfo::new("AMD", 51, 2, "Armenian Dram"),
    CurrencyInfo::new("ANG", 532, 2, "Netherlands Antillean Guilder"),
    CurrencyInfo::new("AOA", 973, 2, "Kwanza"),
    CurrencyInfo::new("ARS", 32, 2, "Argentine Peso"),
    CurrencyInfo::new("AUD", 36, 2, "Australian Dollar"),
    CurrencyInfo::new("AWG", 533, 2, "Aruban Florin"),
    CurrencyInfo::new("AZN", 944, 2, "Azerbaijan Manat"),
    CurrencyInfo::new("BAM", 977, 2, "Convertible Mark"),
    CurrencyInfo::new("BBD", 52, 2, "Barbados Dollar"),
    CurrencyInfo::new("BDT", 50, 2, "Taka"),
    CurrencyInfo::new("BGN", 975, 2, "Bulgarian Lev"),
    CurrencyInfo::new("BHD", 48, 3, "Bahraini Dinar"),
    CurrencyInfo::new("BIF", 108, 0, "Burundi Franc"),
    CurrencyInfo::new("BMD", 60, 2, "Bermudian Dollar"),
    CurrencyInfo::new("BND", 96, 2, "Brunei Dollar"),
    CurrencyInfo::new("BOB", 68, 2, "Boliviano"),
    CurrencyInfo::new("BOV", 984, 2, "Mvdol"),
    CurrencyInfo::new("BRL", 986, 2, "Brazilian Real"),
    CurrencyInfo::new("BSD", 44, 2, "Bahamian Dollar"),
    CurrencyInfo::new("BTN", 64, 2, "Ngultrum"),
    CurrencyInfo::new("BWP", 72, 2, "Pula"),
    CurrencyInfo::new("BYN", 933, 2, "Belarusian Ruble"),
    CurrencyInfo::new("BZD", 84, 2, "Belize Dollar"),
    CurrencyInfo::new("CAD", 124, 2, "Canadian Dollar"),
    CurrencyInfo::new("CDF", 976, 2, "Congolese Franc"),
    CurrencyInfo::new("CHE", 947, 2, "WIR Euro"),
    CurrencyInfo::new("CHF", 756, 2, "Swiss Franc"),
    CurrencyInfo::new("CHW", 948, 2, "WIR Franc"),
    CurrencyInfo::new("CLF", 990, 4, "Unidad de Fomento"),
    CurrencyInfo::new("CLP", 152, 0, "Chilean Peso"),
    CurrencyInfo::new("CNY", 156, 2, "Yuan Renminbi"),
    CurrencyInfo::new("COP", 170, 2, "Colombian Peso"),
    CurrencyInfo::new("COU", 970, 2, "Unidad de Valor Real"),
    CurrencyInfo::new("CRC", 188, 2, "Costa Rican Colon"),
    CurrencyInfo::new("CUC", 931, 2, "Peso Convertible"),
    CurrencyInfo::new("CUP", 192, 2, "Cuban Peso"),
    CurrencyInfo::new("CVE", 132, 2, "Cabo Verde Escudo"),
    CurrencyInfo::new("CZK", 203, 2, "Czech Koruna"),
    CurrencyInfo::new("DJF", 262, 0, "Djibouti Franc"),
    CurrencyInfo::new("DKK", 208, 2, "Danish Krone"),
    CurrencyInfo::new("DOP", 214, 2, "Dominican Peso"),
    CurrencyInfo::new("DZD", 12, 2, "Algerian Dinar"),
    CurrencyInfo::new("EGP", 818, 2, "Egyptian Pound"),
    CurrencyInfo::new("ERN", 232, 2, "Nakfa"),
    CurrencyInfo::new("ETB", 230, 2, "Ethiopian Birr"),
    CurrencyInfo::new("EUR", 978, 2, "Euro"),
    CurrencyInfo::new("FJD", 242, 2, "Fiji Dollar"),
    CurrencyInfo::new("FKP", 238, 2, "Falkland Islands Pound"),
    CurrencyInfo::new("GBP", 826, 2, "Pound Sterling"),
    CurrencyInfo::new("GEL", 981, 2, "Lari"),
    CurrencyInfo::new("GHS", 936, 2, "Ghana Cedi"),
    CurrencyInfo::new("GIP", 292, 2, "Gibraltar Pound"),
    CurrencyInfo::new("GMD", 270, 2, "Dalasi"),
    CurrencyInfo::new("GNF", 324, 0, "Guinean Franc"),
    CurrencyInfo::new("GTQ", 320, 2, "Quetzal"),
    CurrencyInfo::new("GYD", 328, 2, "Guyana Dollar"),
    CurrencyInfo::new("HKD", 344, 2, "Hong Kong Dollar"),
    CurrencyInfo::new("HNL", 340, 2, "Lempira"),
    CurrencyInfo::new("HTG", 332, 2, "Gourde"),
    CurrencyInfo::new("HUF", 348, 2, "Forint"),
    CurrencyInfo::new("IDR", 360, 2, "Rupiah"),
    CurrencyInfo::new("ILS", 376, 2, "New Israeli Sheqel"),
    CurrencyInfo::new("INR", 356, 2, "Indian Rupee"),
    CurrencyInfo::new("IQD", 368, 3, "Iraqi Dinar"),
    CurrencyInfo::new("IRR", 364, 2, "Iranian Rial"),
    CurrencyInfo::new("ISK", 352, 0, "Iceland Krona"),
    CurrencyInfo::new("JMD", 388, 2, "Jamaican Dollar"),
    CurrencyInfo::new("JOD", 400, 3, "Jordanian Dinar"),
    CurrencyInfo::new("JPY", 392, 0, "Yen"),
    CurrencyInfo::new("KES", 404, 2, "Kenyan Shilling"),
    CurrencyInfo::new("KGS", 417, 2, "Som"),
    CurrencyInfo::new("KHR", 116, 2, "Riel"),
    CurrencyInfo::new("KMF", 174, 0, "Comorian Franc"),
    CurrencyInfo::new("KPW", 408, 2, "North Korean Won"),
    CurrencyInfo::new("KRW", 410, 0, "Won"),
    CurrencyInfo::new("KWD", 414, 3, "Kuwaiti Dinar"),
    CurrencyInfo::new("KYD", 136, 2, "Cayman Islands Dollar"),
    CurrencyInfo::new("KZT", 398, 2, "Tenge"),
    CurrencyInfo::new("LAK", 418, 2, "Lao Kip"),
    CurrencyInfo::new("LBP", 422, 2, "Lebanese Pound"),
    CurrencyInfo::new("LKR", 144, 2, "Sri Lanka Rupee"),
    CurrencyInfo::new("LRD", 430, 2, "Liberian Dollar"),
    CurrencyInfo::new("LSL", 426, 2, "Loti"),
    CurrencyInfo::new("LYD", 434, 3, "Libyan Dinar"),
    CurrencyInfo::new("MAD", 504, 2, "Moroccan Dirham"),
    CurrencyInfo::new("MDL", 498, 2, "Moldovan Leu"),
    CurrencyInfo::new("MGA", 969, 2, "Malagasy Ariary"),
    CurrencyInfo::new("MKD", 807, 2, "Denar"),
    CurrencyInfo::new("MMK", 104, 2, "Kyat"),
    CurrencyInfo::new("MNT", 496, 2, "Tugrik"),
    CurrencyInfo::new("MOP", 446, 2, "Pataca"),
    CurrencyInfo::new("MRU", 929, 2, "Ouguiya"),
    CurrencyInfo::new("MUR", 480, 2, "Mauritius Rupee"),
    CurrencyInfo::new("MVR", 462, 2, "Rufiyaa"),
    CurrencyInfo::new("MWK", 454, 2, "Malawi Kwacha"),
    CurrencyInfo::new("MXN", 484, 2, "Mexican Peso"),
    CurrencyInfo::new("MXV", 979, 2, "Mexican Unidad de Inversion (UDI)"),
    CurrencyInfo::new("MYR", 458, 2, "Malaysian Ringgit"),
    CurrencyInfo::new("MZN", 943, 2, "Mozambique Metical"),
    CurrencyInfo::new("NAD", 516, 2, "Namibia Dollar"),
    CurrencyInfo::new("NGN", 566, 2, "Naira"),
    CurrencyInfo::new("NIO", 558, 2, "Cordoba Oro"),
    CurrencyInfo::new("NOK", 578, 2, "Norwegian Krone"),
    CurrencyInfo::new("NPR", 524, 2, "Nepalese Rupee"),
    CurrencyInfo::new("NZD", 554, 2, "New Zealand Dollar"),
    CurrencyInfo::new("OMR", 512, 3, "Rial Omani"),
    CurrencyInfo::new("PAB", 590, 2, "Balboa"),
    CurrencyInfo::new("PEN", 604, 2, "Sol"),
    CurrencyInfo::new("PGK", 598, 2, "Kina"),
    CurrencyInfo::new("PHP", 608, 2, "Philippine Peso"),
    CurrencyInfo::new("PKR", 586, 2, "Pakistan Rupee"),
    CurrencyInfo::new("PLN", 985, 2, "Zloty"),
    CurrencyInfo::new("PYG", 600, 0, "Guarani"),
    CurrencyInfo::new("QAR", 634, 2, "Qatari Rial"),
    CurrencyInfo::new("RON", 946, 2, "Romanian Leu"),
    CurrencyInfo::new("RSD", 941, 2, "Serbian Dinar"),
    CurrencyInfo::new("RUB", 643, 2, "Russian Ruble"),
    CurrencyInfo::new("RWF", 646, 0, "Rwanda Franc"),
    CurrencyInfo::new("SAR", 682, 2, "Saudi Riyal"),
    CurrencyInfo::new("SBD", 90, 2, "Solomon Islands Dollar"),
    CurrencyInfo::new("SCR", 690, 2, "Seychelles Rupee"),
    CurrencyInfo::new("SDG", 938, 2, "Sudanese Pound"),
    CurrencyInfo::new("SEK", 752, 2, "Swedish Krona"),
    CurrencyInfo::new("SGD", 702, 2, "Singapore Dollar"),
    CurrencyInfo::new("SHP", 654, 2, "Saint Helena Pound"),
    CurrencyInfo::new("SLE", 925, 2, "Leone"),
    CurrencyInfo::new("SOS", 706, 2, "Somali Shilling"),
    CurrencyInfo::new("SRD", 968, 2, "Surinam Dollar"),
    CurrencyInfo::new("SSP", 728, 2, "South Sudanese Pound"),
    CurrencyInfo::new("STN", 930, 2, "Dobra"),
    CurrencyInfo::new("SVC", 222, 2, "El Salvador Colon"),
    CurrencyInfo::new("SYP", 760, 2, "Syrian Pound"),
    CurrencyInfo::new("SZL", 748, 2, "Lilangeni"),
    CurrencyInfo::new("THB", 764, 2, "Baht"),
    CurrencyInfo::new("TJS", 972, 2, "Somoni"),
    CurrencyInfo::new("TMT", 934, 2, "Turkmenistan New Manat"),
    CurrencyInfo::new("TND", 788, 3, "Tunisian Dinar"),
    CurrencyInfo::new("TOP", 776, 2, "Pa'anga"),
    CurrencyInfo::new("TRY", 949, 2, "Turkish Lira"),
    CurrencyInfo::new("TTD", 780, 2, "Trinidad and Tobago Dollar"),
    CurrencyInfo::new("TWD", 901, 2, "New Taiwan Dollar"),
    CurrencyInfo::new("TZS", 834, 2, "Tanzanian Shilling"),
    CurrencyInfo::new("UAH", 980, 2, "Hryvnia"),
    CurrencyInfo::new("UGX", 800, 0, "Uganda Shilling"),
    CurrencyInfo::new("USD", 840, 2, "US Dollar"),
    CurrencyInfo::new("USN", 997, 2, "US Dollar (Next day)"),
    CurrencyInfo::new("UYI", 940, 0, "Uruguay Peso en Unidades Indexadas (UI)"),
    CurrencyInfo::new("UYU", 858, 2, "Peso Uruguayo"),
    CurrencyInfo::new("UYW", 927, 4, "Unidad Previsional"),
    CurrencyInfo::new("UZS", 860, 2, "Uzbekistan Sum"),
    CurrencyInfo::new("VED", 926, 2, "Bolivar Soberano (digital)"),
    CurrencyInfo::new("VES", 928, 2, "Bolivar Soberano"),
    CurrencyInfo::new("VND", 704, 0, "Dong"),
    CurrencyInfo::new("VUV", 548, 0, "Vatu"),
    CurrencyInfo::new("WST", 882, 2, "Tala"),
    CurrencyInfo::new("XAF", 950, 0, "CFA Franc BEAC"),
    CurrencyInfo::new("XCD", 951, 2, "East Caribbean Dollar"),
    CurrencyInfo::new("XOF", 952, 0, "CFA Franc BCEAO"),
    CurrencyInfo::new("XPF", 953, 0, "CFP Franc"),
    CurrencyInfo::new("YER", 886, 2, "Yemeni Rial"),
    CurrencyInfo::new("ZAR", 710, 2, "Rand"),
    CurrencyInfo::new("ZMW", 967, 2, "Zambian Kwacha"),
    CurrencyInfo::new("ZWL", 932, 2, "Zimbabwe Dollar"),
];

/// Looks up a currency row. Case-insensitive, surrounding whitespace ignored.
#[must_use]
pub fn find_currency(code: &str) -> Option<&'static CurrencyInfo> {
    let code = code.trim();
    if code.len() != 3 {
        return None;
    }
    let code = code.to_ascii_uppercase();
    ISO_4217
        .binary_search_by(|info| info.code.cmp(code.as_str()))
        .ok()
        .map(|idx| &ISO_4217[idx])
}

/// Returns the minor-unit exponent of `code`.
///
/// # Errors
///
/// Returns `InvalidCurrency` if the code is not in the ISO 4217 table.
pub fn get_exponent(code: &str) -> MoneyResult<u32> {
    find_currency(code)
        .map(|info| info.digits)
        .ok_or_else(|| MoneyError::InvalidCurrency(code.to_string()))
}

/// Returns the minor-unit exponent of `code`, or `default` if it is unknown.
#[must_use]
pub fn get_exponent_safe(code: &str, default: u32) -> u32 {
    find_currency(code).map_or(default, |info| info.digits)
}

/// Returns true if `code` is in the ISO 4217 table.
#[must_use]
pub fn is_valid_currency(code: &str) -> bool {
    find_currency(code).is_some()
}

/// Lists every known currency in table order.
#[must_use]
pub fn get_currency_options() -> Vec<CurrencyOption> {
    ISO_4217
        .iter()
        .map(|info| CurrencyOption {
            code: info.code,
            label: format!("{} - {}", info.code, info.name),
            name: info.name,
            digits: info.digits,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USD", 2)]
    #[case("EUR", 2)]
    #[case("SAR", 2)]
    #[case("JPY", 0)]
    #[case("KRW", 0)]
    #[case("KWD", 3)]
    #[case("BHD", 3)]
    #[case("CLF", 4)]
    fn test_get_exponent(#[case] code: &str, #[case] expected: u32) {
        assert_eq!(get_exponent(code).unwrap(), expected);
    }

    #[test]
    fn test_get_exponent_normalizes_input() {
        assert_eq!(get_exponent("jpy").unwrap(), 0);
        assert_eq!(get_exponent(" kwd ").unwrap(), 3);
    }

    #[rstest]
    #[case("")]
    #[case("XYZ")]
    #[case("US")]
    #[case("DOLLAR")]
    #[case("XAU")]
    fn test_get_exponent_invalid(#[case] code: &str) {
        assert_eq!(
            get_exponent(code),
            Err(MoneyError::InvalidCurrency(code.to_string()))
        );
        assert!(!is_valid_currency(code));
    }

    #[test]
    fn test_get_exponent_safe() {
        assert_eq!(get_exponent_safe("JPY", DEFAULT_EXPONENT), 0);
        assert_eq!(get_exponent_safe("XYZ", DEFAULT_EXPONENT), 2);
        assert_eq!(get_exponent_safe("XYZ", 3), 3);
    }

    #[test]
    fn test_is_valid_currency() {
        assert!(is_valid_currency("USD"));
        assert!(is_valid_currency("usd"));
        assert!(!is_valid_currency("ABC"));
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        // binary_search in find_currency depends on this
        assert!(ISO_4217.windows(2).all(|pair| pair[0].code < pair[1].code));
    }

    #[test]
    fn test_get_currency_options() {
        let options = get_currency_options();
        assert_eq!(options.len(), ISO_4217.len());
        assert_eq!(options[0].code, "AED");

        let usd = options.iter().find(|o| o.code == "USD").unwrap();
        assert_eq!(usd.label, "USD - US Dollar");
        assert_eq!(usd.name, "US Dollar");
        assert_eq!(usd.digits, 2);

        let order: Vec<_> = options.iter().map(|o| o.code).collect();
        let table: Vec<_> = ISO_4217.iter().map(|i| i.code).collect();
        assert_eq!(order, table);
    }

    #[test]
    fn test_find_currency() {
        let kwd = find_currency("KWD").unwrap();
        assert_eq!(kwd.numeric, 414);
        assert_eq!(kwd.name, "Kuwaiti Dinar");
        assert!(find_currency("QQQ").is_none());
    }
}

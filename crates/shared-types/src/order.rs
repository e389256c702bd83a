use serde::{Deserialize, Serialize};

/// Substring that marks an anchor as a PDF download link.
pub const DOWNLOAD_MARKER: &str = "download_pdf";

/// Whether an `href` points at the backend's PDF download route.
pub fn is_download_href(href: &str) -> bool {
    href.contains(DOWNLOAD_MARKER)
}

// ── Generated order files ───────────────────────────────────────────

/// Reference to one numbered order of a case, as named by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
    pub order_number: u32,
}

impl OrderRef {
    /// File stem such as `CRL_A__45_2023_order_1`. Dots in the case type
    /// become underscores.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}_order_{}",
            self.case_type.replace('.', "_"),
            self.case_number,
            self.filing_year,
            self.order_number
        )
    }

    /// Path of the generated PDF on the backend.
    pub fn href(&self) -> String {
        format!("/{DOWNLOAD_MARKER}/{}", self.file_stem())
    }

    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.file_stem())
    }

    /// Recover the reference from a generated file name such as
    /// `CRL_A__45_2023_order_1` (a `.pdf` suffix is allowed).
    ///
    /// Underscores are read as separators and at least four parts are
    /// required. The order number is the last part when it is all digits,
    /// otherwise 1. A leading case type from [`CASE_TYPES`](crate::CASE_TYPES)
    /// is matched in its encoded form first, so dotted types survive.
    pub fn from_file_name(name: &str) -> Option<OrderRef> {
        let stem = name.strip_suffix(".pdf").unwrap_or(name);
        let cleaned = stem.replace("__", "_").replace('_', " ");
        let parts: Vec<&str> = cleaned.split_whitespace().collect();
        if parts.len() < 4 {
            return None;
        }

        let last = parts[parts.len() - 1];
        let order_number = if last.chars().all(|c| c.is_ascii_digit()) {
            last.parse().unwrap_or(1)
        } else {
            1
        };

        let known = crate::CASE_TYPES.iter().find_map(|(value, _)| {
            let encoded = format!("{}_", value.replace('.', "_"));
            stem.strip_prefix(encoded.as_str()).map(|rest| (*value, rest))
        });
        if let Some((case_type, rest)) = known {
            let mut tail = rest.split('_').filter(|p| !p.is_empty());
            if let (Some(case_number), Some(filing_year)) = (tail.next(), tail.next()) {
                return Some(OrderRef {
                    case_type: case_type.to_string(),
                    case_number: case_number.to_string(),
                    filing_year: filing_year.to_string(),
                    order_number,
                });
            }
        }

        Some(OrderRef {
            case_type: parts[0].to_string(),
            case_number: parts[1].to_string(),
            filing_year: parts[2].to_string(),
            order_number,
        })
    }

    /// Parse a backend download path such as `/download_pdf/RFA_1_2020_order_2`.
    pub fn from_href(href: &str) -> Option<OrderRef> {
        let file = href.strip_prefix(&format!("/{DOWNLOAD_MARKER}/"))?;
        Self::from_file_name(file)
    }
}

/// Backend path that serves `pdf_url`.
///
/// Absolute source URLs are proxied through the download route with a
/// suggested file name; backend paths are used as they are.
pub fn download_href(pdf_url: &str, file_name: &str) -> String {
    if pdf_url.starts_with("http://") || pdf_url.starts_with("https://") {
        format!(
            "/{DOWNLOAD_MARKER}?url={}&filename={}",
            urlencoding::encode(pdf_url),
            urlencoding::encode(file_name)
        )
    } else {
        pdf_url.to_string()
    }
}

// ── Case export JSON ────────────────────────────────────────────────

/// One order or judgment listed for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOrder {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub order_type: String,
    #[serde(default)]
    pub pdf_url: String,
}

/// Case details as returned by the backend's JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExport {
    pub case_title: String,
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filing_date: String,
    #[serde(default)]
    pub petitioner: String,
    #[serde(default)]
    pub respondent: String,
    #[serde(default)]
    pub next_hearing_date: String,
    #[serde(default)]
    pub orders: Vec<CaseOrder>,
    #[serde(default)]
    pub query_timestamp: String,
    #[serde(default)]
    pub source: String,
}

impl CaseExport {
    /// Reference for the order at `index` (zero-based) in `orders`.
    pub fn order_ref(&self, index: usize) -> OrderRef {
        OrderRef {
            case_type: self.case_type.clone(),
            case_number: self.case_number.clone(),
            filing_year: self.filing_year.clone(),
            order_number: u32::try_from(index + 1).unwrap_or(u32::MAX),
        }
    }

    /// File name offered for the order at `index`. A backend path already
    /// names its file; anything else is named after the case.
    pub fn order_file_name(&self, index: usize) -> Option<String> {
        let order = self.orders.get(index)?;
        let order_ref =
            OrderRef::from_href(&order.pdf_url).unwrap_or_else(|| self.order_ref(index));
        Some(order_ref.file_name())
    }

    /// Backend download path for the order at `index`.
    ///
    /// Orders without a source URL point at the backend's generated PDF for
    /// that order.
    pub fn order_download_href(&self, index: usize) -> Option<String> {
        let order = self.orders.get(index)?;
        if order.pdf_url.is_empty() {
            return Some(self.order_ref(index).href());
        }
        let file_name = self.order_file_name(index)?;
        Some(download_href(&order.pdf_url, &file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(n: u32) -> OrderRef {
        OrderRef {
            case_type: "CRL.A.".into(),
            case_number: "45".into(),
            filing_year: "2023".into(),
            order_number: n,
        }
    }

    #[test]
    fn file_stem_replaces_dots() {
        assert_eq!(order(1).file_stem(), "CRL_A__45_2023_order_1");
        assert_eq!(order(2).href(), "/download_pdf/CRL_A__45_2023_order_2");
        assert_eq!(order(3).file_name(), "CRL_A__45_2023_order_3.pdf");
    }

    #[test]
    fn download_marker_detection() {
        assert!(is_download_href("/download_pdf/RFA_1_2020_order_1"));
        assert!(is_download_href("https://host/download_pdf?url=x"));
        assert!(!is_download_href("/export_case_json/3"));
        assert!(!is_download_href(""));
    }

    #[test]
    fn absolute_pdf_urls_are_proxied() {
        let href = download_href("https://court.example/o 1.pdf", "RFA_1_2020_order_1.pdf");
        assert_eq!(
            href,
            "/download_pdf?url=https%3A%2F%2Fcourt.example%2Fo%201.pdf&filename=RFA_1_2020_order_1.pdf"
        );
        assert!(is_download_href(&href));
    }

    #[test]
    fn backend_paths_pass_through() {
        assert_eq!(
            download_href("/download_pdf/RFA_1_2020_order_1", "ignored.pdf"),
            "/download_pdf/RFA_1_2020_order_1"
        );
    }

    #[test]
    fn export_json_parses_backend_shape() {
        let json = r#"{
            "case_title": "State vs Accused Person",
            "case_type": "CRL.A.",
            "case_number": "45",
            "filing_year": "2023",
            "status": "Pending",
            "filing_date": "Not available",
            "bench": "Court Information",
            "petitioner": "State of Delhi",
            "respondent": "Accused Person & Others",
            "next_hearing_date": "Not scheduled",
            "orders": [
                {"title": "Order one", "date": "01-02-2024", "type": "Interim Order",
                 "pdf_url": "/download_pdf/CRL_A__45_2023_order_1"},
                {"title": "Order two", "date": "05-03-2024", "type": "Case Management Order",
                 "pdf_url": ""}
            ],
            "query_timestamp": "2024-03-05T10:00:00",
            "source": "NyayaLens"
        }"#;
        let export: CaseExport = serde_json::from_str(json).unwrap();
        assert_eq!(export.orders.len(), 2);
        assert_eq!(export.orders[0].order_type, "Interim Order");
        assert_eq!(
            export.order_download_href(0).as_deref(),
            Some("/download_pdf/CRL_A__45_2023_order_1")
        );
        assert_eq!(
            export.order_download_href(1).as_deref(),
            Some("/download_pdf/CRL_A__45_2023_order_2")
        );
        assert_eq!(export.order_download_href(9), None);
    }

    #[test]
    fn file_name_with_too_few_parts_is_rejected() {
        assert_eq!(OrderRef::from_file_name("RFA_12_2021"), None);
        assert_eq!(OrderRef::from_file_name("order.pdf"), None);
        assert_eq!(OrderRef::from_file_name(""), None);
    }

    #[test]
    fn plain_file_name_parses_positionally() {
        let parsed = OrderRef::from_file_name("RFA_12_2021_order_3.pdf").unwrap();
        assert_eq!(parsed.case_type, "RFA");
        assert_eq!(parsed.case_number, "12");
        assert_eq!(parsed.filing_year, "2021");
        assert_eq!(parsed.order_number, 3);
    }

    #[test]
    fn non_digit_last_part_means_first_order() {
        let parsed = OrderRef::from_file_name("RFA_12_2021_judgment").unwrap();
        assert_eq!(parsed.order_number, 1);
        assert_eq!(parsed.filing_year, "2021");
    }

    #[test]
    fn dotted_case_types_survive_file_naming() {
        for n in [1, 7] {
            let original = order(n);
            assert_eq!(OrderRef::from_file_name(&original.file_name()), Some(original.clone()));
            assert_eq!(OrderRef::from_href(&original.href()), Some(original));
        }

        let writ = OrderRef {
            case_type: "W.P.(C)".into(),
            case_number: "881".into(),
            filing_year: "2019".into(),
            order_number: 2,
        };
        assert_eq!(OrderRef::from_file_name(&writ.file_stem()), Some(writ));
    }

    #[test]
    fn from_href_needs_the_download_route() {
        assert_eq!(OrderRef::from_href("/export_case_json/RFA_12_2021_order_1"), None);
        assert_eq!(
            OrderRef::from_href("/download_pdf/RFA_12_2021_order_2").map(|o| o.order_number),
            Some(2)
        );
    }

    #[test]
    fn proxied_orders_keep_the_backend_file_name() {
        let json = r#"{"case_title":"A vs B","case_type":"RFA","case_number":"12","filing_year":"2021",
            "orders":[
                {"title":"t","date":"d","type":"x","pdf_url":"/download_pdf/RFA_12_2021_order_4"},
                {"title":"t","date":"d","type":"x","pdf_url":"https://court.example/a.pdf"}
            ]}"#;
        let export: CaseExport = serde_json::from_str(json).unwrap();
        assert_eq!(
            export.order_file_name(0).as_deref(),
            Some("RFA_12_2021_order_4.pdf")
        );
        assert_eq!(
            export.order_file_name(1).as_deref(),
            Some("RFA_12_2021_order_2.pdf")
        );
        assert_eq!(
            export.order_download_href(1).as_deref(),
            Some("/download_pdf?url=https%3A%2F%2Fcourt.example%2Fa.pdf&filename=RFA_12_2021_order_2.pdf")
        );
    }

    #[test]
    fn export_json_tolerates_missing_optional_fields() {
        let json = r#"{"case_title":"A vs B","case_type":"RFA","case_number":"1","filing_year":"2020"}"#;
        let export: CaseExport = serde_json::from_str(json).unwrap();
        assert!(export.orders.is_empty());
        assert!(export.status.is_empty());
    }
}

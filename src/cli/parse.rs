use algotrace_core::algos::Algorithm;
use algotrace_core::format::OutputFormat;
use algotrace_core::frontier::FrontierKind;

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse frontier kind from string
pub fn parse_frontier(s: &str) -> std::result::Result<FrontierKind, String> {
    s.parse::<FrontierKind>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

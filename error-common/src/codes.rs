// Stable error codes carried in API error bodies

pub mod validation {
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const MALFORMED_BODY: &str = "VALIDATION_1003";
}

pub mod ledger {
    pub const STORAGE_FAILURE: &str = "LEDGER_4001";
}

pub mod routing {
    pub const NOT_FOUND: &str = "ROUTE_5001";
}

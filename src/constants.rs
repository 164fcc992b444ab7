pub const API_NAME: &str = "[autos-api-rust]";

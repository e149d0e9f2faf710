// Schema validation tests for the REST request bodies
//
// These tests construct JSON values directly (independent of Rust structs)
// and validate them against the JSON Schema files in schemas/api/.

use serde_json::json;

fn load_schema(name: &str) -> serde_json::Value {
    let path = format!("{}/schemas/api/{name}", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read schema {path}: {e}"));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Failed to parse schema {path}: {e}"))
}

fn build_validator(schema_name: &str) -> jsonschema::Validator {
    let schema = load_schema(schema_name);
    jsonschema::options()
        .with_retriever(LocalRetriever)
        .build(&schema)
        .unwrap_or_else(|e| panic!("Failed to compile schema {schema_name}: {e}"))
}

fn validate(schema_name: &str, instance: &serde_json::Value) {
    let validator = build_validator(schema_name);
    let errors: Vec<_> = validator.iter_errors(instance).collect();
    if !errors.is_empty() {
        let msgs: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
        panic!(
            "Schema validation failed for {schema_name}:\n{}\nInstance: {}",
            msgs.join("\n"),
            serde_json::to_string_pretty(instance).unwrap()
        );
    }
}

fn validate_fails(schema_name: &str, instance: &serde_json::Value) {
    let validator = build_validator(schema_name);
    assert!(
        !validator.is_valid(instance),
        "Expected schema validation to fail for {schema_name}, but it passed.\nInstance: {}",
        serde_json::to_string_pretty(instance).unwrap()
    );
}

// Retriever that loads $ref schemas from the local filesystem
struct LocalRetriever;

impl jsonschema::Retrieve for LocalRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<String>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let schema_dir = format!("{}/schemas/api/", env!("CARGO_MANIFEST_DIR"));

        // Extract the schema filename from various URI forms:
        // - "json-schema:///common.schema.json"
        // - "file:///path/to/common.schema.json"
        // - "common.schema.json"
        let filename = if let Some(rest) = uri_str.strip_prefix("json-schema:///") {
            rest
        } else if let Some(path) = uri_str.strip_prefix("file://") {
            // For file:// URIs, use the path directly
            let text = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&text)?);
        } else {
            uri_str
        };

        let path = format!("{schema_dir}{filename}");
        if std::path::Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)?;
            return Ok(serde_json::from_str(&text)?);
        }
        Err(format!("Cannot retrieve schema: {uri_str}").into())
    }
}

// =========================================================================
// auth
// =========================================================================

#[test]
fn auth_request_valid() {
    validate(
        "auth_request.schema.json",
        &json!({
            "email": "user@example.com",
            "password": "secret",
            "app_id": "00000000-0000-0000-0000-000000000001"
        }),
    );
}

#[test]
fn auth_request_missing_app_id_rejected() {
    validate_fails(
        "auth_request.schema.json",
        &json!({
            "email": "user@example.com",
            "password": "secret"
        }),
    );
}

#[test]
fn auth_request_bare_email_rejected() {
    validate_fails(
        "auth_request.schema.json",
        &json!({
            "email": "not-an-email",
            "password": "secret",
            "app_id": "00000000-0000-0000-0000-000000000001"
        }),
    );
}

#[test]
fn auth_request_extra_field_rejected() {
    validate_fails(
        "auth_request.schema.json",
        &json!({
            "email": "user@example.com",
            "password": "secret",
            "app_id": "00000000-0000-0000-0000-000000000001",
            "remember_me": true
        }),
    );
}

// =========================================================================
// panel/login
// =========================================================================

#[test]
fn panel_login_request_valid() {
    validate(
        "panel_login_request.schema.json",
        &json!({
            "user_code": "1234",
            "app_type": "com.visonic.powermaxapp",
            "app_id": "00000000-0000-0000-0000-000000000001",
            "panel_serial": "123ABC"
        }),
    );
}

#[test]
fn panel_login_request_wrong_app_type_rejected() {
    validate_fails(
        "panel_login_request.schema.json",
        &json!({
            "user_code": "1234",
            "app_type": "com.example.other",
            "app_id": "00000000-0000-0000-0000-000000000001",
            "panel_serial": "123ABC"
        }),
    );
}

#[test]
fn panel_login_request_missing_panel_serial_rejected() {
    validate_fails(
        "panel_login_request.schema.json",
        &json!({
            "user_code": "1234",
            "app_type": "com.visonic.powermaxapp",
            "app_id": "00000000-0000-0000-0000-000000000001"
        }),
    );
}

// =========================================================================
// set_state
// =========================================================================

#[test]
fn set_state_request_away() {
    validate(
        "set_state_request.schema.json",
        &json!({ "partition": 1, "state": "AWAY" }),
    );
}

#[test]
fn set_state_request_whole_system() {
    validate(
        "set_state_request.schema.json",
        &json!({ "partition": -1, "state": "DISARM" }),
    );
}

#[test]
fn set_state_request_unknown_state_rejected() {
    validate_fails(
        "set_state_request.schema.json",
        &json!({ "partition": 1, "state": "NIGHT" }),
    );
}

#[test]
fn set_state_request_partition_as_string_rejected() {
    validate_fails(
        "set_state_request.schema.json",
        &json!({ "partition": "1", "state": "AWAY" }),
    );
}

#[test]
fn set_state_request_partition_below_sentinel_rejected() {
    validate_fails(
        "set_state_request.schema.json",
        &json!({ "partition": -2, "state": "AWAY" }),
    );
}

// =========================================================================
// set_bypass_zone
// =========================================================================

#[test]
fn set_bypass_zone_request_valid() {
    validate(
        "set_bypass_zone_request.schema.json",
        &json!({ "zone": 4, "set": true }),
    );
}

#[test]
fn set_bypass_zone_request_set_as_string_rejected() {
    validate_fails(
        "set_bypass_zone_request.schema.json",
        &json!({ "zone": 4, "set": "true" }),
    );
}

// =========================================================================
// set_user_code / set_name
// =========================================================================

#[test]
fn set_user_code_request_valid() {
    validate(
        "set_user_code_request.schema.json",
        &json!({ "user_code": "5678", "user_id": 2 }),
    );
}

#[test]
fn set_user_code_request_numeric_code_rejected() {
    // The panel pin travels as a string, not a number
    validate_fails(
        "set_user_code_request.schema.json",
        &json!({ "user_code": 5678, "user_id": 2 }),
    );
}

#[test]
fn set_name_request_valid() {
    validate(
        "set_name_request.schema.json",
        &json!({ "class": "USER", "id": 2, "name": "Sam" }),
    );
}

#[test]
fn set_name_request_missing_class_rejected() {
    validate_fails(
        "set_name_request.schema.json",
        &json!({ "id": 2, "name": "Sam" }),
    );
}

// =========================================================================
// panel/add
// =========================================================================

#[test]
fn panel_add_request_valid() {
    validate(
        "panel_add_request.schema.json",
        &json!({
            "alias": "Home",
            "panel_serial": "123ABC",
            "access_proof": null,
            "master_user_code": "1234"
        }),
    );
}

#[test]
fn panel_add_request_with_access_proof() {
    validate(
        "panel_add_request.schema.json",
        &json!({
            "alias": "Home",
            "panel_serial": "123ABC",
            "access_proof": "proof-token",
            "master_user_code": "1234"
        }),
    );
}

#[test]
fn panel_add_request_missing_master_code_rejected() {
    validate_fails(
        "panel_add_request.schema.json",
        &json!({
            "alias": "Home",
            "panel_serial": "123ABC",
            "access_proof": null
        }),
    );
}

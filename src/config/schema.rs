use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "nsg": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "min_count": { "type": "integer", "minimum": 0 },
                    "wanted_findings": {
                        "type": "array",
                        "items": { "type": "string", "minLength": 1 }
                    },
                    "output": { "$ref": "#/$defs/output_path" }
                }
            },
            "buckets": { "$ref": "#/$defs/report" },
            "flowlogs": { "$ref": "#/$defs/report" }
        },
        "$defs": {
            "report": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "output": { "$ref": "#/$defs/output_path" }
                }
            },
            "output_path": { "type": "string", "minLength": 1 }
        }
    })
});

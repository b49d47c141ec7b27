mod json_roundtrip;
mod nested_materialization;
mod properties;

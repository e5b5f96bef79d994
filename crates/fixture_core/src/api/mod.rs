pub mod fixture_json;

pub use fixture_json::{
    execute_fixture_json, fixture_request_schema, fixture_response_schema, FixtureRequest,
    FixtureRequestType, FixtureResponse, FixtureResponseType, SCHEMA_VERSION,
};

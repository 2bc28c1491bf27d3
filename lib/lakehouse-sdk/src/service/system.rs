//! File uploads and console health.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::{
    CallHeaders, DetailedResponse, FileWithMetadata, LakehouseClient, LakehouseError, Transport,
};

pub(crate) static PARSE_CSV: Operation = Operation::post("parse_csv", "/parse/csv")
    .required(&["engine", "parse_file", "file_type"])
    .multipart_body();
pub(crate) static UPLOAD_JSON: Operation = Operation::post("upload_json", "/upload/json")
    .required(&["json", "engine", "type"])
    .multipart_body();
pub(crate) static TEST_LH_CONSOLE: Operation = Operation::get("test_lh_console", "/ready");

/// Parameters of [`LakehouseClient::parse_csv`].
#[derive(Debug, Clone, Default)]
pub struct ParseCsvParams {
    /// Engine parsing the file.
    pub engine: Option<String>,
    /// The CSV file.
    pub parse_file: Option<FileWithMetadata>,
    /// File type, e.g. `csv`.
    pub file_type: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::upload_json`].
#[derive(Debug, Clone, Default)]
pub struct UploadJsonParams {
    /// The JSON document.
    pub json: Option<String>,
    /// Target engine.
    pub engine: Option<String>,
    /// Upload type. Sent as `type`.
    pub upload_type: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::test_lh_console`].
#[derive(Debug, Clone, Default)]
pub struct TestLhConsoleParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Uploads a CSV file to be parsed.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine`, `parse_file` or
    /// `file_type` is missing.
    pub async fn parse_csv(
        &self,
        params: ParseCsvParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ParseCsvParams {
            engine,
            parse_file,
            file_type,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&PARSE_CSV)
            .form_part("engine", engine)?
            .form_part("parse_file", parse_file)?
            .form_part("file_type", file_type)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Uploads a JSON document.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `json`, `engine` or `upload_type`
    /// is missing.
    pub async fn upload_json(
        &self,
        params: UploadJsonParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UploadJsonParams {
            json,
            engine,
            upload_type,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPLOAD_JSON)
            .form_part("json", json)?
            .form_part("engine", engine)?
            .form_part("type", upload_type)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Checks that the console is ready.
    ///
    /// # Errors
    ///
    /// Fails if the service is not reachable or not ready.
    pub async fn test_lh_console(
        &self,
        params: TestLhConsoleParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let TestLhConsoleParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&TEST_LH_CONSOLE)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}

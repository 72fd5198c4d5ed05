use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 2))]
    pub reg_no: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub webhook: String,
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRequest {
    pub final_query: String,
}

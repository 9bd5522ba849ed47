use serde::{Deserialize, Serialize};

pub type Addr = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    pub admins: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Opaque two dimensional payload, its payout semantics belong to the contract.
    Split { amounts: Vec<Vec<Addr>> },
    WithdrawRemains {},
    AddMember { admin: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    AdminList {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminListResp {
    pub admins: Vec<String>,
}

use log::debug;

use super::msg::{AdminListResp, Addr, ExecuteMsg};
use super::query::SplitVotaQueryClient;
use crate::client::chain_res::ExecResponse;
use crate::client::error::ClientError;
use crate::client::fee::Fee;
use crate::client::traits::SigningCosmWasm;
use crate::config::cfg::Coin;

/// Signing client for a deployed split contract, bound to a single sender.
///
/// Every execute method submits one new transaction. Nothing is retried or
/// deduplicated, callers own that.
#[derive(Clone, Debug)]
pub struct SplitVotaClient<C> {
    querier: SplitVotaQueryClient<C>,
    sender: String,
}

impl<C: SigningCosmWasm> SplitVotaClient<C> {
    /// Binds `client` to `sender` and `contract_address`. Performs no network I/O.
    pub fn new<S: Into<String>, A: Into<String>>(
        client: C,
        sender: S,
        contract_address: A,
    ) -> Result<Self, ClientError> {
        let sender = sender.into();
        if sender.is_empty() {
            return Err(ClientError::missing_address("sender"));
        }

        Ok(Self {
            querier: SplitVotaQueryClient::new(client, contract_address)?,
            sender,
        })
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn contract_address(&self) -> &str {
        self.querier.contract_address()
    }

    /// Read-only view over the same chain client and contract.
    pub fn querier(&self) -> &SplitVotaQueryClient<C> {
        &self.querier
    }

    pub async fn admin_list(&self) -> Result<AdminListResp, ClientError> {
        self.querier.admin_list().await
    }

    /// Sends `{"split":{"amounts":..}}`. The contract only accepts it from an admin.
    ///
    /// # Arguments
    /// * `amounts` - Groups of recipient addresses, passed through untouched.
    /// * `fee` - Defaults to [Fee::Auto].
    /// * `memo` - Defaults to an empty memo.
    /// * `funds` - Tokens attached to the execution, defaults to none.
    pub async fn split(
        &self,
        amounts: Vec<Vec<Addr>>,
        fee: Option<Fee>,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecResponse, ClientError> {
        self.execute(&ExecuteMsg::Split { amounts }, fee, memo, funds)
            .await
    }

    /// Sends `{"withdraw_remains":{}}`, moving the contract balance to the sender.
    pub async fn withdraw_remains(
        &self,
        fee: Option<Fee>,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecResponse, ClientError> {
        self.execute(&ExecuteMsg::WithdrawRemains {}, fee, memo, funds)
            .await
    }

    /// Sends `{"add_member":{"admin":..}}`, registering another contract admin.
    pub async fn add_member<S: Into<String>>(
        &self,
        admin: S,
        fee: Option<Fee>,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecResponse, ClientError> {
        let msg = ExecuteMsg::AddMember {
            admin: admin.into(),
        };
        self.execute(&msg, fee, memo, funds).await
    }

    async fn execute(
        &self,
        msg: &ExecuteMsg,
        fee: Option<Fee>,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecResponse, ClientError> {
        let payload = serde_json::to_vec(msg).map_err(ClientError::json)?;

        let res = self
            .querier
            .client
            .execute(
                &self.sender,
                self.querier.contract_address(),
                payload,
                fee.unwrap_or_default(),
                memo,
                funds.unwrap_or_default(),
            )
            .await?;
        debug!("{:?}", res.res);

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::chain_res::{ChainResponse, Event};
    use crate::client::fee::StdFee;
    use crate::client::mock_chain::{query_json, utf8, MockChain};
    use crate::client::Code;
    use assert_matches::assert_matches;

    const SENDER: &str = "dora1admin";
    const CONTRACT: &str = "dora1contract";

    // Stubs a single execute call and asserts everything the facade forwards.
    fn expect_execute(
        chain: &mut MockChain,
        payload: &'static str,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) {
        faux::when!(chain.execute).once().then(
            move |(sender, contract, p, f, m, coins)| {
                assert_eq!(sender, SENDER);
                assert_eq!(contract, CONTRACT);
                assert_eq!(utf8(&p), payload);
                assert_eq!(f, fee);
                assert_eq!(m, memo);
                assert_eq!(coins, funds);
                Ok(ExecResponse::default())
            },
        );
    }

    #[test]
    fn rejects_empty_addresses() {
        let chain = MockChain::faux();

        assert_matches!(
            SplitVotaClient::new(&chain, "", CONTRACT),
            Err(ClientError::MissingAddress { name }) if name == "sender"
        );
        assert_matches!(
            SplitVotaClient::new(&chain, SENDER, ""),
            Err(ClientError::MissingAddress { name }) if name == "contract"
        );
    }

    #[test]
    fn accepts_mixed_address_types() {
        let chain = MockChain::faux();
        let sender = SENDER.to_string();

        let client = SplitVotaClient::new(&chain, sender, CONTRACT).unwrap();

        assert_eq!(client.sender(), SENDER);
        assert_eq!(client.contract_address(), CONTRACT);
    }

    #[tokio::test]
    async fn split_payload() {
        let mut chain = MockChain::faux();
        expect_execute(
            &mut chain,
            r#"{"split":{"amounts":[["addrA","addrB"],["addrC"]]}}"#,
            Fee::Auto,
            None,
            vec![],
        );

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        client
            .split(
                vec![
                    vec!["addrA".to_string(), "addrB".to_string()],
                    vec!["addrC".to_string()],
                ],
                None,
                None,
                None,
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn withdraw_remains_defaults() {
        let mut chain = MockChain::faux();
        expect_execute(
            &mut chain,
            r#"{"withdraw_remains":{}}"#,
            Fee::Auto,
            None,
            vec![],
        );

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        client.withdraw_remains(None, None, None).await.unwrap();
    }

    #[tokio::test]
    async fn passes_explicit_fee_memo_and_funds_through() {
        let explicit = Fee::Explicit(StdFee {
            amount: vec![Coin::new(100_000, "peaka")],
            gas: 200_000,
        });
        let funds = vec![Coin::new(160_000, "peaka"), Coin::new(10_000, "ibc/1234")];

        let mut chain = MockChain::faux();
        expect_execute(
            &mut chain,
            r#"{"split":{"amounts":[[]]}}"#,
            explicit.clone(),
            Some("round 1".to_string()),
            funds.clone(),
        );

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        client
            .split(
                vec![vec![]],
                Some(explicit),
                Some("round 1".to_string()),
                Some(funds),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn passes_gas_multiplier_through() {
        let mut chain = MockChain::faux();
        expect_execute(
            &mut chain,
            r#"{"withdraw_remains":{}}"#,
            Fee::GasMultiplier(1.5),
            None,
            vec![],
        );

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        client
            .withdraw_remains(Some(Fee::GasMultiplier(1.5)), None, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_member_payload() {
        let mut chain = MockChain::faux();
        expect_execute(
            &mut chain,
            r#"{"add_member":{"admin":"dora1newadmin"}}"#,
            Fee::Auto,
            None,
            vec![],
        );

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        client
            .add_member("dora1newadmin", None, None, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn returns_chain_response_unchanged() {
        let mut chain = MockChain::faux();
        faux::when!(chain.execute).then(|_| {
            Ok(ExecResponse {
                res: ChainResponse {
                    gas_used: 123_456,
                    gas_wanted: 200_000,
                    ..Default::default()
                },
                tx_hash: "ABCDEF".to_string(),
                height: 42,
                events: vec![Event {
                    kind: "transfer".to_string(),
                    attributes: vec![("recipient".to_string(), "addrA".to_string())],
                }],
            })
        });

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        let res = client
            .split(vec![vec!["addrA".to_string()]], None, None, None)
            .await
            .unwrap();

        assert_eq!(res.tx_hash, "ABCDEF");
        assert_eq!(res.height, 42);
        assert_eq!(res.gas_used(), 123_456);
        assert_eq!(res.events[0].attribute("recipient"), Some("addrA"));
    }

    #[tokio::test]
    async fn propagates_contract_rejection() {
        let mut chain = MockChain::faux();
        faux::when!(chain.execute).then(|_| {
            Err(ClientError::CosmosSdk {
                res: ChainResponse {
                    code: Code::Err(5),
                    log: "dora1admin is not a contract admin".to_string(),
                    ..Default::default()
                },
            })
        });

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();

        assert_matches!(
            client.withdraw_remains(None, None, None).await,
            Err(ClientError::CosmosSdk { res }) if res.log == "dora1admin is not a contract admin"
        );
    }

    #[tokio::test]
    async fn each_call_submits_a_new_tx() {
        let mut chain = MockChain::faux();
        faux::when!(chain.execute)
            .times(2)
            .then(|_| Ok(ExecResponse::default()));

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();

        client.withdraw_remains(None, None, None).await.unwrap();
        client.withdraw_remains(None, None, None).await.unwrap();
    }

    #[tokio::test]
    async fn admin_list_uses_same_contract() {
        let mut chain = MockChain::faux();
        faux::when!(chain.query_contract_smart)
            .once()
            .then(|(address, payload)| {
                assert_eq!(address, CONTRACT);
                assert_eq!(utf8(&payload), r#"{"admin_list":{}}"#);
                Ok(query_json(r#"{"admins":["dora1admin"]}"#))
            });

        let client = SplitVotaClient::new(&chain, SENDER, CONTRACT).unwrap();
        let res = client.admin_list().await.unwrap();

        assert_eq!(res.admins, vec!["dora1admin".to_string()]);
        assert_eq!(client.querier().contract_address(), CONTRACT);
    }
}

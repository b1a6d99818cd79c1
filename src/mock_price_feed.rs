use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Int256, MessageInfo, Response, StdResult,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::state::{ADMIN, LATEST_ANSWER};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub answer: Int256,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetAnswer { answer: Int256 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    LatestAnswer {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LatestAnswerResponse {
    pub answer: Int256,
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    ADMIN.save(deps.storage, &info.sender)?;
    LATEST_ANSWER.save(deps.storage, &msg.answer)?;

    Ok(Response::new().add_attribute("answer", msg.answer.to_string()))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAnswer { answer } => {
            // only the oracle operator moves the price
            if info.sender != ADMIN.load(deps.storage)? {
                return Err(ContractError::Unauthorized {});
            }
            LATEST_ANSWER.save(deps.storage, &answer)?;

            Ok(Response::new()
                .add_attribute("method", "set_answer")
                .add_attribute("answer", answer.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LatestAnswer {} => to_json_binary(&LatestAnswerResponse {
            answer: LATEST_ANSWER.load(deps.storage)?,
        }),
    }
}

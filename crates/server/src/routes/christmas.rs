//! Handlers for the stateless novelty endpoints. All the logic worth
//! testing lives in `service::christmas`; these functions only shape JSON.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::christmas;

/// GET /api/christmas/countdown
pub async fn countdown() -> Json<Value> {
    let c = christmas::countdown_to_christmas(Utc::now());
    let message = if c.days == 0 {
        "Merry Christmas!".to_string()
    } else {
        format!("{} days until Christmas!", c.days)
    };
    Json(json!({
        "message": message,
        "countdown": {
            "days": c.days,
            "hours": c.hours,
            "minutes": c.minutes,
            "seconds": c.seconds,
        },
        "christmasDate": c.date.format("%Y-%m-%d").to_string(),
    }))
}

/// GET /api/christmas/fact
pub async fn fact() -> Json<Value> {
    Json(json!({ "fact": christmas::random_fact() }))
}

/// GET /api/christmas/naughty-or-nice/:name
pub async fn naughty_or_nice(Path(name): Path<String>) -> Json<Value> {
    let verdict = christmas::naughty_or_nice(&name);
    let (status, message, coal) = if verdict.nice {
        (
            "nice",
            format!("{name} has been nice this year! Santa is pleased."),
            "0%".to_string(),
        )
    } else {
        (
            "naughty",
            format!("{name} might want to reconsider some life choices..."),
            format!("{}%", verdict.coal_probability),
        )
    };
    Json(json!({
        "name": name,
        "status": status,
        "message": message,
        "coalProbability": coal,
    }))
}

/// GET /api/christmas/reindeer
pub async fn reindeer() -> Json<Value> {
    let order = christmas::sleigh_order();
    let leader = order.first().copied().unwrap_or_default();
    Json(json!({
        "sleighOrder": order,
        "leader": leader,
        "message": format!("Tonight's sleigh formation is led by {leader}!"),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wish: String,
    #[serde(default)]
    pub has_been_good: bool,
}

/// POST /api/christmas/letter-to-santa
///
/// The letter still succeeds when the store is down: the wish id is simply
/// omitted. This degradation is deliberate and load-bearing.
pub async fn letter_to_santa(
    State(state): State<ServerState>,
    Json(input): Json<LetterInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let name = input.name.trim();
    let wish = input.wish.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }
    if wish.is_empty() {
        return Err(ApiError::bad_request("wish is required"));
    }

    let wish_id = match state
        .wishes
        .submit(&format!("[Letter from {name}]: {wish}"))
        .await
    {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(error = %e, "letter accepted without persistence");
            None
        }
    };

    let santa_response = if christmas::is_naughty_wish(wish) {
        "Ho ho ho... interesting choice. We will see about that."
    } else if input.has_been_good {
        christmas::random_nice_message()
    } else {
        "Santa appreciates your honesty. Keep trying to be good!"
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "received": true,
            "wishId": wish_id,
            "from": name,
            "wish": wish,
            "santaResponse": santa_response,
            "timestamp": Utc::now().to_rfc3339(),
        })),
    ))
}

/// GET /api/christmas/tree
pub async fn tree_default() -> Json<Value> {
    let height = christmas::TREE_DEFAULT_HEIGHT as usize;
    Json(json!({
        "tree": christmas::render_tree(height),
        "height": height,
        "decorations": { "stars": height, "ornaments": height - 1 },
        "note": "Use /api/christmas/tree/:height for custom height (3-15)",
    }))
}

/// GET /api/christmas/tree/:height
pub async fn tree_sized(Path(raw): Path<String>) -> Json<Value> {
    let requested = match raw.parse::<i64>() {
        Ok(h) if h != 0 => h,
        _ => christmas::TREE_DEFAULT_HEIGHT,
    };
    let height = christmas::clamp_tree_height(requested);
    Json(json!({
        "tree": christmas::render_tree(height),
        "height": height,
        "decorations": { "stars": height, "ornaments": height - 1 },
    }))
}

/// GET /api/christmas/gift-suggestion
pub async fn gift_default() -> Json<Value> {
    let tier = christmas::BudgetTier::Medium;
    let options = christmas::suggestions_for(tier);
    let suggestion = options.first().copied().unwrap_or_default();
    Json(json!({
        "recipient": "someone special",
        "budgetTier": tier.as_str(),
        "suggestion": suggestion,
        "message": format!("For someone special, we suggest: {suggestion}"),
        "allOptionsInTier": options,
        "note": "Use /api/christmas/gift-suggestion/:budget or /api/christmas/gift-suggestion/:budget/:recipient for custom options",
    }))
}

/// GET /api/christmas/gift-suggestion/:budget
pub async fn gift_for_budget(Path(budget): Path<String>) -> Json<Value> {
    gift_response(&budget, "someone special")
}

/// GET /api/christmas/gift-suggestion/:budget/:recipient
pub async fn gift_for_recipient(
    Path((budget, recipient)): Path<(String, String)>,
) -> Json<Value> {
    gift_response(&budget, &recipient)
}

fn gift_response(budget: &str, recipient: &str) -> Json<Value> {
    let tier = christmas::budget_tier(Some(budget));
    let suggestion = christmas::random_gift(tier);
    Json(json!({
        "recipient": recipient,
        "budgetTier": tier.as_str(),
        "suggestion": suggestion,
        "message": format!("For {recipient}, we suggest: {suggestion}"),
        "allOptionsInTier": christmas::suggestions_for(tier),
    }))
}

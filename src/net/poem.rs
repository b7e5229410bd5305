use crate::errors::{AppError, AppResult};
use crate::models::poem::Poem;
use crate::ui::messages;
use serde::Deserialize;

pub const POEM_URL: &str = "https://api.apiopen.top/api/sentences";

#[derive(Debug, Deserialize)]
struct SentenceResponse {
    code: i64,
    result: Option<SentenceBody>,
}

#[derive(Debug, Deserialize)]
struct SentenceBody {
    name: String,
    from: String,
}

/// Fetch a random poem line, or the constant fallback on any failure.
///
/// Single attempt, no retry. The failure is logged as a diagnostic warning
/// and never propagated: the status view always has a poem to show.
pub fn fetch_poem() -> Poem {
    match try_fetch() {
        Ok(poem) => poem,
        Err(e) => {
            messages::warning(format!("poem fetch failed ({}), using fallback", e));
            fallback_poem()
        }
    }
}

fn try_fetch() -> AppResult<Poem> {
    let body = super::http_client()?.get(POEM_URL).send()?.text()?;
    parse_poem(&body)
}

/// Parse the endpoint's `{code: 200, result: {name, from}}` payload.
/// Anything else is an unexpected response.
pub fn parse_poem(body: &str) -> AppResult<Poem> {
    let resp: SentenceResponse = serde_json::from_str(body)?;
    if resp.code != 200 {
        return Err(AppError::UnexpectedResponse(format!(
            "poem endpoint returned code {}",
            resp.code
        )));
    }
    let result = resp
        .result
        .ok_or_else(|| AppError::UnexpectedResponse("poem endpoint returned no result".into()))?;

    // "from" arrives as either "Author《Title》" or a bare source name.
    let (author, origin) = split_attribution(&result.from);
    Ok(Poem {
        content: result.name,
        author,
        origin,
    })
}

fn split_attribution(from: &str) -> (String, String) {
    if let Some((author, title)) = from.split_once('《') {
        let origin = title.trim_end_matches('》');
        (author.trim().to_string(), origin.to_string())
    } else {
        (from.trim().to_string(), String::new())
    }
}

pub fn fallback_poem() -> Poem {
    Poem {
        content: "The woods are lovely, dark and deep, but I have promises to keep.".to_string(),
        author: "Robert Frost".to_string(),
        origin: "Stopping by Woods on a Snowy Evening".to_string(),
    }
}

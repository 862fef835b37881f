use serde_json::Value;

use crate::error::{json_type, ResponseError, StatusError};
use crate::models::{Homework, HomeworkResponse, HomeworkStatus};

/// Every type check runs before any homework element is read.
pub fn check_response(response: Value) -> Result<HomeworkResponse, ResponseError> {
    let mut body = match response {
        Value::Object(body) => body,
        other => {
            return Err(ResponseError::NotAnObject {
                found: json_type(&other),
            })
        }
    };

    let items = match body.remove("homeworks") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ResponseError::HomeworksNotAList {
                found: json_type(&other),
            })
        }
        None => return Err(ResponseError::MissingHomeworks),
    };

    let current_date = match body.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or(ResponseError::InvalidCurrentDate {
            found: json_type(value),
        })?),
    };

    let homeworks = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Homework>(item)
                .map_err(|source| ResponseError::InvalidHomework { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HomeworkResponse {
        homeworks,
        current_date,
    })
}

pub fn parse_status(homework: &Homework) -> Result<String, StatusError> {
    let verdict = homework.status.parse::<HomeworkStatus>()?.verdict();
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    ))
}

use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::repo_types::User;
use crate::error::AppError;
use crate::meals::{
    dto::{ListQuery, MealListResponse, MealRequest},
    repo_types::{Meal, MealFields},
    streak::{leading_diet_streak, DietFlag},
};

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap();
    static ref TIME_RE: Regex = Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap();
}

pub(crate) fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

pub(crate) fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Checks a create/update payload and turns it into column values.
pub fn validate_meal(req: MealRequest) -> Result<MealFields, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is empty!".into()));
    }
    let description = req.description.trim();
    if description.is_empty() {
        return Err(AppError::BadRequest("Description is empty!".into()));
    }
    if !is_valid_date(&req.date) {
        return Err(AppError::BadRequest("Date must be in format dd/mm/yyyy".into()));
    }
    if !is_valid_time(&req.time) {
        return Err(AppError::BadRequest("Time must be in format hh:mm:ss".into()));
    }
    Ok(MealFields {
        name: name.to_string(),
        description: description.to_string(),
        date: req.date,
        time: req.time,
        within_diet: req.within_diet,
    })
}

/// Builds the listing for `meals`, which must be in creation order.
pub fn summarize(user: &User, meals: Vec<Meal>, query: &ListQuery) -> MealListResponse {
    let mut out = MealListResponse {
        id: user.id,
        username: user.username.clone(),
        total_register: None,
        total_within_diet: None,
        total_without_diet: None,
        better_sequence_within_diet: None,
        meals: Vec::new(),
    };

    if query.total_register {
        out.total_register = Some(meals.len());
        out.meals = meals;
    } else if query.total_within_diet {
        out.meals = meals.into_iter().filter(|m| m.is_within_diet()).collect();
        out.total_within_diet = Some(out.meals.len());
    } else if query.total_without_diet {
        out.meals = meals.into_iter().filter(|m| !m.is_within_diet()).collect();
        out.total_without_diet = Some(out.meals.len());
    } else if query.better_sequence_within_diet {
        let (streak, len) = leading_diet_streak(&meals);
        out.better_sequence_within_diet = Some(len);
        out.meals = streak.to_vec();
    } else {
        out.meals = meals;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn request(date: &str, time: &str) -> MealRequest {
        MealRequest {
            name: "Omelette".into(),
            description: "Two eggs".into(),
            date: date.into(),
            time: time.into(),
            within_diet: true,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "grace".into(),
            password_hash: String::new(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        }
    }

    fn meals(flags: &[bool]) -> Vec<Meal> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &within_diet)| Meal {
                id: Uuid::new_v4(),
                user_id: Uuid::nil(),
                session_id: Uuid::nil(),
                name: format!("meal-{i}"),
                description: "desc".into(),
                date: "10/10/2023".into(),
                time: "12:00:00".into(),
                within_diet,
                created_at: OffsetDateTime::UNIX_EPOCH,
                updated_at: None,
            })
            .collect()
    }

    #[test]
    fn date_and_time_formats() {
        assert!(is_valid_date("10/10/2023"));
        assert!(!is_valid_date("2023-10-10"));
        assert!(!is_valid_date("1/10/2023"));
        assert!(is_valid_time("12:00:00"));
        assert!(!is_valid_time("12:00"));
        assert!(!is_valid_time("12:00:00 PM"));
    }

    #[test]
    fn only_ascii_digits_are_accepted() {
        assert!(!is_valid_date("١٠/١٠/٢٠٢٣"));
        assert!(!is_valid_date("１０/１０/２０２３"));
        assert!(!is_valid_time("١٢:٠٠:٠٠"));
        assert!(!is_valid_time("१२:००:००"));
    }

    #[test]
    fn validate_meal_accepts_well_formed_request() {
        let mut req = request("11/10/2023", "13:00:00");
        req.name = "  Omelette ".into();
        let fields = validate_meal(req).unwrap();
        assert_eq!(fields.name, "Omelette");
        assert_eq!(fields.date, "11/10/2023");
        assert!(fields.within_diet);
    }

    #[test]
    fn validate_meal_reports_the_bad_field() {
        let err = validate_meal(request("2023/10/10", "12:00:00")).unwrap_err();
        assert_eq!(err.to_string(), "Date must be in format dd/mm/yyyy");

        let err = validate_meal(request("10/10/2023", "noon")).unwrap_err();
        assert_eq!(err.to_string(), "Time must be in format hh:mm:ss");

        let mut blank = request("10/10/2023", "12:00:00");
        blank.description = " ".into();
        assert!(matches!(validate_meal(blank), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn request_accepts_camel_case_flag() {
        let req: MealRequest = serde_json::from_value(serde_json::json!({
            "name": "Meal",
            "description": "Meal description",
            "date": "10/10/2023",
            "time": "12:00:00",
            "withinDiet": false
        }))
        .unwrap();
        assert!(!req.within_diet);
    }

    #[test]
    fn plain_listing_returns_everything_without_counters() {
        let u = user();
        let out = summarize(&u, meals(&[true, false]), &ListQuery::default());
        assert_eq!(out.meals.len(), 2);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["username"], "grace");
        assert!(json.get("total_register").is_none());
        assert!(json.get("better_sequence_within_diet").is_none());
    }

    #[test]
    fn within_and_without_diet_totals() {
        let u = user();
        let within = ListQuery {
            total_within_diet: true,
            ..Default::default()
        };
        let out = summarize(&u, meals(&[true, false, true]), &within);
        assert_eq!(out.total_within_diet, Some(2));
        assert!(out.meals.iter().all(|m| m.within_diet));

        let without = ListQuery {
            total_without_diet: true,
            ..Default::default()
        };
        let out = summarize(&u, meals(&[true, false, true]), &without);
        assert_eq!(out.total_without_diet, Some(1));
        assert_eq!(out.meals[0].name, "meal-1");
    }

    #[test]
    fn better_sequence_is_the_leading_streak() {
        let q = ListQuery {
            better_sequence_within_diet: true,
            ..Default::default()
        };
        let out = summarize(&user(), meals(&[true, true, false, true]), &q);
        assert_eq!(out.better_sequence_within_diet, Some(2));
        let names: Vec<_> = out.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["meal-0", "meal-1"]);
    }

    #[test]
    fn total_register_takes_precedence() {
        let q = ListQuery {
            total_register: true,
            better_sequence_within_diet: true,
            ..Default::default()
        };
        let out = summarize(&user(), meals(&[false, true]), &q);
        assert_eq!(out.total_register, Some(2));
        assert_eq!(out.better_sequence_within_diet, None);
        assert_eq!(out.meals.len(), 2);
    }
}

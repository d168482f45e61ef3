//! Request validation: per-field rules applied after a body has been parsed into its typed struct.

use crate::error::AppError;
use crate::models::{FavoriteCharacterRequest, FavoritePlanetRequest, NewCharacter, NewPlanet, NewUser};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn required(col: &str, v: &str) -> Result<(), AppError> {
    if v.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    Ok(())
}

fn max_length(col: &str, v: &str, max: usize) -> Result<(), AppError> {
    if v.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, max
        )));
    }
    Ok(())
}

fn required_text(col: &str, v: &str, max: usize) -> Result<(), AppError> {
    required(col, v)?;
    max_length(col, v, max)
}

fn optional_text(col: &str, v: Option<&str>, max: usize) -> Result<(), AppError> {
    match v {
        Some(s) => max_length(col, s, max),
        None => Ok(()),
    }
}

fn positive_id(col: &str, id: i64) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::Validation(format!("{} must be a positive integer", col)));
    }
    Ok(())
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

fn email(col: &str, v: &str) -> Result<(), AppError> {
    if !EMAIL.is_match(v) {
        return Err(AppError::Validation(format!("{} must be a valid email", col)));
    }
    Ok(())
}

impl Validate for NewPlanet {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(id) = self.id {
            positive_id("id", id)?;
        }
        required_text("name", &self.name, 120)?;
        required_text("description", &self.description, 80)?;
        required_text("diameter", &self.diameter, 80)
    }
}

impl Validate for NewCharacter {
    fn validate(&self) -> Result<(), AppError> {
        required_text("name", &self.name, 80)?;
        optional_text("description", self.description.as_deref(), 250)?;
        optional_text("gender", self.gender.as_deref(), 80)?;
        if let Some(h) = self.height {
            if h < 0 {
                return Err(AppError::Validation("height must be at least 0".into()));
            }
        }
        Ok(())
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(id) = self.id {
            positive_id("id", id)?;
        }
        required_text("name", &self.name, 120)?;
        required_text("email", &self.email, 120)?;
        email("email", &self.email)?;
        required_text("password", &self.password, 80)
    }
}

impl Validate for FavoritePlanetRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive_id("user_id", self.user_id)?;
        if let Some(id) = self.planet_id {
            positive_id("planet_id", id)?;
        }
        Ok(())
    }
}

impl Validate for FavoriteCharacterRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive_id("user_id", self.user_id)?;
        if let Some(id) = self.character_id {
            positive_id("character_id", id)?;
        }
        Ok(())
    }
}

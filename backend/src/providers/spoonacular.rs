//! Recipe catalog adapter (spoonacular)
//!
//! Forwards meal filters to the upstream complex search and flattens the
//! per-recipe nutrient arrays into a macro record. Search results fail soft
//! to an empty list; single-recipe detail lookups propagate errors.

use crate::config::ProviderEndpoint;
use crate::providers::ProviderError;
use fitjourney_shared::models::{Macros, RecipeDetails, RecipeItem};
use fitjourney_shared::types::Intolerances;
use serde::Deserialize;
use tracing::warn;

/// Raw results requested per search; callers slice further
const SEARCH_RESULT_COUNT: u32 = 20;
/// Upstream defaults mirrored from the original search behavior
const DEFAULT_CUISINE: &str = "indian";
const DEFAULT_DIET: &str = "balanced";
const DEFAULT_CALORIE_CEILING: i32 = 2000;

// ============================================================================
// Upstream schema
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchRecipe>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRecipe {
    id: i64,
    title: String,
    image: Option<String>,
    ready_in_minutes: Option<i32>,
    servings: Option<i32>,
    summary: Option<String>,
    nutrition: Option<Nutrition>,
}

#[derive(Debug, Deserialize, Default)]
struct Nutrition {
    #[serde(default)]
    nutrients: Vec<Nutrient>,
}

#[derive(Debug, Deserialize)]
struct Nutrient {
    name: String,
    amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    id: i64,
    title: String,
    image: Option<String>,
    summary: Option<String>,
    instructions: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<Ingredient>,
    ready_in_minutes: Option<i32>,
    servings: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Ingredient {
    original: String,
}

impl Nutrition {
    /// Name-matched flattening; any unmatched nutrient defaults to 0
    fn flatten(&self) -> (f64, Macros) {
        let amount = |name: &str| {
            self.nutrients
                .iter()
                .find(|n| n.name == name)
                .map(|n| n.amount)
                .unwrap_or(0.0)
        };
        (
            amount("Calories"),
            Macros {
                protein: amount("Protein"),
                carbs: amount("Carbohydrates"),
                fat: amount("Fat"),
            },
        )
    }
}

impl SearchRecipe {
    fn into_item(self) -> RecipeItem {
        let (calories, macros) = self.nutrition.unwrap_or_default().flatten();
        RecipeItem {
            id: self.id,
            title: self.title,
            image: self.image,
            calories,
            macros,
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            summary: self.summary,
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Recipe catalog client
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RecipeClient {
    pub fn new(http: reqwest::Client, endpoint: &ProviderEndpoint) -> Self {
        Self {
            http,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            api_key: endpoint.api_key.clone(),
        }
    }

    /// Recommend up to 20 meals matching the filters.
    ///
    /// Fail-soft: upstream errors, missing credentials, and malformed
    /// payloads all yield an empty list, never an error.
    pub async fn recommend_meals(
        &self,
        cuisine: Option<&str>,
        diet: Option<&str>,
        calorie_ceiling: Option<i32>,
        intolerances: &Intolerances,
    ) -> Vec<RecipeItem> {
        match self
            .fetch_meals(cuisine, diet, calorie_ceiling, intolerances)
            .await
        {
            Ok(meals) => meals,
            Err(err) => {
                warn!(error = %err, "meal recommendations degraded to empty");
                Vec::new()
            }
        }
    }

    async fn fetch_meals(
        &self,
        cuisine: Option<&str>,
        diet: Option<&str>,
        calorie_ceiling: Option<i32>,
        intolerances: &Intolerances,
    ) -> Result<Vec<RecipeItem>, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredentials)?;

        let mut query = vec![
            ("apiKey", api_key.clone()),
            ("cuisine", cuisine.unwrap_or(DEFAULT_CUISINE).to_string()),
            ("diet", diet.unwrap_or(DEFAULT_DIET).to_string()),
            (
                "maxCalories",
                calorie_ceiling.unwrap_or(DEFAULT_CALORIE_CEILING).to_string(),
            ),
            ("number", SEARCH_RESULT_COUNT.to_string()),
            ("addRecipeNutrition", "true".to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        if let Some(filter) = intolerances.to_filter() {
            query.push(("intolerances", filter));
        }

        let response = self
            .http
            .get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        let results = body.results.ok_or_else(|| {
            ProviderError::UnexpectedPayload("search response missing results".to_string())
        })?;

        Ok(results.into_iter().map(SearchRecipe::into_item).collect())
    }

    /// Full detail for a single recipe, including ingredients and
    /// instructions. Propagates upstream failure.
    pub async fn recipe_details(&self, id: i64) -> Result<RecipeDetails, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredentials)?;

        let response = self
            .http
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("apiKey", api_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let info: RecipeInformation = response.json().await?;
        Ok(RecipeDetails {
            id: info.id,
            title: info.title,
            image: info.image,
            summary: info.summary,
            instructions: info.instructions,
            ingredients: info
                .extended_ingredients
                .into_iter()
                .map(|i| i.original)
                .collect(),
            ready_in_minutes: info.ready_in_minutes,
            servings: info.servings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RecipeClient {
        RecipeClient::new(
            reqwest::Client::new(),
            &ProviderEndpoint {
                base_url: server.uri(),
                api_key: Some("test-key".to_string()),
            },
        )
    }

    #[tokio::test]
    async fn test_nutrients_are_flattened_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/complexSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": 1,
                    "title": "Dal Tadka",
                    "image": "https://img/1.jpg",
                    "readyInMinutes": 35,
                    "servings": 4,
                    "summary": "A lentil classic.",
                    "nutrition": {
                        "nutrients": [
                            {"name": "Calories", "amount": 420.0},
                            {"name": "Protein", "amount": 18.5},
                            {"name": "Carbohydrates", "amount": 52.0},
                            {"name": "Fat", "amount": 12.0},
                            {"name": "Sodium", "amount": 300.0}
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let meals = client
            .recommend_meals(Some("indian"), None, Some(2000), &Intolerances::None)
            .await;

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].calories, 420.0);
        assert_eq!(meals[0].macros.protein, 18.5);
        assert_eq!(meals[0].macros.carbs, 52.0);
        assert_eq!(meals[0].macros.fat, 12.0);
    }

    #[tokio::test]
    async fn test_missing_nutrition_defaults_to_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/complexSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 2, "title": "Mystery Meal"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let meals = client
            .recommend_meals(None, None, None, &Intolerances::None)
            .await;

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].calories, 0.0);
        assert_eq!(meals[0].macros.protein, 0.0);
        assert_eq!(meals[0].macros.carbs, 0.0);
        assert_eq!(meals[0].macros.fat, 0.0);
    }

    #[tokio::test]
    async fn test_intolerances_forwarded_comma_joined() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/complexSearch"))
            .and(query_param("intolerances", "gluten,dairy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let intolerances =
            Intolerances::Many(vec!["gluten".to_string(), "dairy".to_string()]);
        let meals = client
            .recommend_meals(None, None, None, &intolerances)
            .await;
        assert!(meals.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/complexSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "failure"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let meals = client
            .recommend_meals(None, None, None, &Intolerances::None)
            .await;
        assert!(meals.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(0)
            .mount(&server)
            .await;

        let client = RecipeClient::new(
            reqwest::Client::new(),
            &ProviderEndpoint {
                base_url: server.uri(),
                api_key: None,
            },
        );
        let meals = client
            .recommend_meals(None, None, None, &Intolerances::None)
            .await;
        assert!(meals.is_empty());
    }

    #[tokio::test]
    async fn test_recipe_details_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/5/information"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5,
                "title": "Palak Paneer",
                "image": "https://img/5.jpg",
                "summary": "Spinach and cheese.",
                "instructions": "Cook it.",
                "extendedIngredients": [
                    {"original": "200g paneer"},
                    {"original": "500g spinach"}
                ],
                "readyInMinutes": 40,
                "servings": 2
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let details = client.recipe_details(5).await.unwrap();
        assert_eq!(details.title, "Palak Paneer");
        assert_eq!(details.ingredients.len(), 2);
        assert_eq!(details.servings, Some(2));
    }

    #[tokio::test]
    async fn test_recipe_details_propagates_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/99/information"))
            .respond_with(ResponseTemplate::new(402))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.recipe_details(99).await.is_err());
    }
}

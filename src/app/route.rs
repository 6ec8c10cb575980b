// SPDX-License-Identifier: MPL-2.0
//! Routes between the two screens.
//!
//! | Path            | Screen          |
//! |-----------------|-----------------|
//! | `/`             | recipe list     |
//! | `/recipe/:id`   | recipe detail   |
//! | anything else   | recipe list     |

use crate::recipe::RecipeId;

const RECIPE_PREFIX: &str = "/recipe/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Recipe(RecipeId),
}

impl Route {
    /// Parses a path. Unknown paths redirect to the list.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        match path.strip_prefix(RECIPE_PREFIX) {
            Some(id) => {
                let id = id.trim_end_matches('/');
                if id.is_empty() || id.contains('/') {
                    Route::List
                } else {
                    Route::Recipe(RecipeId::new(id))
                }
            }
            None => Route::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Recipe(id) => format!("{RECIPE_PREFIX}{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_list() {
        assert_eq!(Route::parse("/"), Route::List);
    }

    #[test]
    fn recipe_path_carries_id() {
        assert_eq!(
            Route::parse("/recipe/52772"),
            Route::Recipe(RecipeId::new("52772"))
        );
        assert_eq!(
            Route::parse("/recipe/3/"),
            Route::Recipe(RecipeId::new("3"))
        );
    }

    #[test]
    fn unmatched_paths_redirect_to_list() {
        for path in ["", "/recipes", "/recipe/", "/recipe/1/edit", "/about", "recipe/1"] {
            assert_eq!(Route::parse(path), Route::List, "{path}");
        }
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::List, Route::Recipe(RecipeId::new("52772"))] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}

//! Form state and transitions of the subcategory management screen
//!
//! `update` is pure: it mutates the form and describes the I/O to perform as
//! `Effect`s. Outcomes of that I/O come back in as `Msg`s.

use crate::shared::api_error::ApiError;
use crate::shared::toast::Notification;
use contracts::domain::a001_category::aggregate::{find_name, Category, CategoryId};
use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto, SubcategoryId};

pub const MSG_SELECT_CATEGORY: &str = "Please select a Category!";
pub const MSG_ENTER_NAME: &str = "Please enter Subcategory Name!";
pub const MSG_ADDED: &str = "Subcategory Added!";
pub const MSG_UPDATED: &str = "Subcategory Updated!";
pub const MSG_DELETED: &str = "Subcategory Deleted!";
pub const CONFIRM_DELETE: &str = "Delete this subcategory?";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Parent column text; stale or missing references render as "Unknown".
pub fn parent_category_name(categories: &[Category], category_id: &CategoryId) -> String {
    find_name(categories, category_id)
        .unwrap_or(UNKNOWN_CATEGORY)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Draft owned by the screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcategoryForm {
    pub category_id: Option<CategoryId>,
    pub sub_name: String,
    /// Row being edited; `None` means create-mode
    pub edit_data: Option<Subcategory>,
    /// Category whose list was last requested. Survives `reset` so a delete
    /// after a cleared selection still refreshes the list on screen.
    pub listed_category: Option<CategoryId>,
}

impl SubcategoryForm {
    pub fn mode(&self) -> FormMode {
        if self.edit_data.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "Submit",
            FormMode::Edit => "Update",
        }
    }

    fn reset(&mut self) {
        self.sub_name.clear();
        self.category_id = None;
        self.edit_data = None;
    }

    /// Selection-change rule: every change to a non-empty category fetches
    /// that category's list; re-selecting the same value is not a change.
    fn select_category(&mut self, category_id: Option<CategoryId>) -> Option<Effect> {
        if self.category_id == category_id {
            return None;
        }
        self.category_id = category_id.clone();
        let category_id = category_id?;
        self.listed_category = Some(category_id.clone());
        Some(Effect::FetchSubcategories(category_id))
    }

    fn validate(&self) -> Result<SubcategoryDto, &'static str> {
        let Some(category_id) = self.category_id.clone() else {
            return Err(MSG_SELECT_CATEGORY);
        };
        if self.sub_name.trim().is_empty() {
            return Err(MSG_ENTER_NAME);
        }
        Ok(SubcategoryDto::new(self.sub_name.clone(), category_id))
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Mounted,
    CategorySelected(Option<CategoryId>),
    NameChanged(String),
    Submit,
    Edit(Subcategory),
    DeleteRequested(SubcategoryId),
    DeleteConfirmed(SubcategoryId),
    Cancel,
    MutationSucceeded(MutationOutcome),
    MutationFailed(ApiError),
}

/// Successful mutation plus the category list to re-read afterwards
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Added { refresh: CategoryId },
    Updated { refresh: CategoryId },
    Deleted { refresh: Option<CategoryId> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCategories,
    FetchSubcategories(CategoryId),
    Create {
        data: SubcategoryDto,
        refresh: CategoryId,
    },
    Update {
        id: SubcategoryId,
        data: SubcategoryDto,
        refresh: CategoryId,
    },
    ConfirmDelete(SubcategoryId),
    Delete {
        id: SubcategoryId,
        refresh: Option<CategoryId>,
    },
    Notify(Notification),
}

pub fn update(form: &mut SubcategoryForm, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Mounted => vec![Effect::FetchCategories],

        Msg::CategorySelected(category_id) => form.select_category(category_id).into_iter().collect(),

        Msg::NameChanged(name) => {
            form.sub_name = name;
            vec![]
        }

        Msg::Submit => {
            let data = match form.validate() {
                Ok(data) => data,
                Err(message) => return vec![Effect::Notify(Notification::error(message))],
            };
            let refresh = data.category_id.clone();
            match &form.edit_data {
                Some(original) => vec![Effect::Update {
                    id: original.id.clone(),
                    data,
                    refresh,
                }],
                None => vec![Effect::Create { data, refresh }],
            }
        }

        Msg::Edit(row) => {
            form.sub_name = row.name.clone();
            let category_id = row.category_id.clone();
            form.edit_data = Some(row);
            form.select_category(Some(category_id)).into_iter().collect()
        }

        Msg::DeleteRequested(id) => vec![Effect::ConfirmDelete(id)],

        Msg::DeleteConfirmed(id) => {
            let refresh = form
                .category_id
                .clone()
                .or_else(|| form.listed_category.clone());
            vec![Effect::Delete { id, refresh }]
        }

        Msg::Cancel => {
            form.reset();
            vec![]
        }

        Msg::MutationSucceeded(outcome) => {
            let (message, refresh) = match outcome {
                MutationOutcome::Added { refresh } => {
                    form.reset();
                    (MSG_ADDED, Some(refresh))
                }
                MutationOutcome::Updated { refresh } => {
                    form.reset();
                    (MSG_UPDATED, Some(refresh))
                }
                MutationOutcome::Deleted { refresh } => (MSG_DELETED, refresh),
            };
            let mut effects = vec![Effect::Notify(Notification::success(message))];
            if let Some(category_id) = refresh {
                form.listed_category = Some(category_id.clone());
                effects.push(Effect::FetchSubcategories(category_id));
            }
            effects
        }

        Msg::MutationFailed(error) => vec![Effect::Notify(Notification::error(format!(
            "Error: {}",
            error.message()
        )))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str) -> CategoryId {
        CategoryId::new(id)
    }

    fn row(id: &str, name: &str, category: &str) -> Subcategory {
        Subcategory::new(SubcategoryId::new(id), name, cat(category))
    }

    fn is_dispatch(effect: &Effect) -> bool {
        matches!(
            effect,
            Effect::Create { .. } | Effect::Update { .. } | Effect::Delete { .. }
        )
    }

    #[test]
    fn test_parent_category_name() {
        let categories = vec![Category::new(cat("c1"), "Shoes")];
        assert_eq!(parent_category_name(&categories, &cat("c1")), "Shoes");
        assert_eq!(parent_category_name(&categories, &cat("gone")), "Unknown");
        assert_eq!(parent_category_name(&[], &cat("c1")), "Unknown");
    }

    #[test]
    fn test_mount_fetches_categories() {
        let mut form = SubcategoryForm::default();
        assert_eq!(update(&mut form, Msg::Mounted), vec![Effect::FetchCategories]);
    }

    #[test]
    fn test_submit_without_category() {
        let mut form = SubcategoryForm {
            sub_name: "Sneakers".into(),
            ..Default::default()
        };
        let effects = update(&mut form, Msg::Submit);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::error(MSG_SELECT_CATEGORY))]
        );
        assert!(!effects.iter().any(is_dispatch));
    }

    #[test]
    fn test_category_checked_before_name() {
        let mut form = SubcategoryForm::default();
        assert_eq!(
            update(&mut form, Msg::Submit),
            vec![Effect::Notify(Notification::error(MSG_SELECT_CATEGORY))]
        );
    }

    #[test]
    fn test_submit_with_blank_name() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        update(&mut form, Msg::NameChanged("   \t".into()));

        let effects = update(&mut form, Msg::Submit);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::error(MSG_ENTER_NAME))]
        );
        assert_eq!(form.sub_name, "   \t");
    }

    #[test]
    fn test_submit_creates_with_form_values() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        update(&mut form, Msg::NameChanged("Sneakers".into()));

        assert_eq!(
            update(&mut form, Msg::Submit),
            vec![Effect::Create {
                data: SubcategoryDto::new("Sneakers", cat("c1")),
                refresh: cat("c1"),
            }]
        );
    }

    #[test]
    fn test_submit_in_edit_mode_updates_and_reparents() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1")));
        update(&mut form, Msg::CategorySelected(Some(cat("c2"))));
        update(&mut form, Msg::NameChanged("Trainers".into()));

        assert_eq!(
            update(&mut form, Msg::Submit),
            vec![Effect::Update {
                id: SubcategoryId::new("s1"),
                data: SubcategoryDto::new("Trainers", cat("c2")),
                refresh: cat("c2"),
            }]
        );
    }

    #[test]
    fn test_selection_change_fetches_each_time() {
        let mut form = SubcategoryForm::default();
        assert_eq!(
            update(&mut form, Msg::CategorySelected(Some(cat("c1")))),
            vec![Effect::FetchSubcategories(cat("c1"))]
        );
        assert!(update(&mut form, Msg::CategorySelected(Some(cat("c1")))).is_empty());
        assert_eq!(
            update(&mut form, Msg::CategorySelected(Some(cat("c2")))),
            vec![Effect::FetchSubcategories(cat("c2"))]
        );
        assert!(update(&mut form, Msg::CategorySelected(None)).is_empty());
        assert_eq!(form.category_id, None);
    }

    #[test]
    fn test_edit_populates_form() {
        let mut form = SubcategoryForm::default();
        let effects = update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1")));

        assert_eq!(effects, vec![Effect::FetchSubcategories(cat("c1"))]);
        assert_eq!(form.sub_name, "Sneakers");
        assert_eq!(form.category_id, Some(cat("c1")));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.submit_label(), "Update");
    }

    #[test]
    fn test_edit_within_selected_category_does_not_refetch() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        assert!(update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1"))).is_empty());
    }

    #[test]
    fn test_cancel_after_edit() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1")));

        assert!(update(&mut form, Msg::Cancel).is_empty());
        assert_eq!(form.sub_name, "");
        assert_eq!(form.category_id, None);
        assert_eq!(form.edit_data, None);
        assert_eq!(form.submit_label(), "Submit");
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));

        let effects = update(&mut form, Msg::DeleteRequested(SubcategoryId::new("s1")));
        assert_eq!(effects, vec![Effect::ConfirmDelete(SubcategoryId::new("s1"))]);

        assert_eq!(
            update(&mut form, Msg::DeleteConfirmed(SubcategoryId::new("s1"))),
            vec![Effect::Delete {
                id: SubcategoryId::new("s1"),
                refresh: Some(cat("c1")),
            }]
        );
    }

    #[test]
    fn test_delete_after_cleared_selection_refreshes_listed_category() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        update(&mut form, Msg::Cancel);

        assert_eq!(
            update(&mut form, Msg::DeleteConfirmed(SubcategoryId::new("s1"))),
            vec![Effect::Delete {
                id: SubcategoryId::new("s1"),
                refresh: Some(cat("c1")),
            }]
        );
    }

    #[test]
    fn test_create_success_resets_and_refetches() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        update(&mut form, Msg::NameChanged("Sneakers".into()));

        let effects = update(
            &mut form,
            Msg::MutationSucceeded(MutationOutcome::Added { refresh: cat("c1") }),
        );
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notification::success(MSG_ADDED)),
                Effect::FetchSubcategories(cat("c1")),
            ]
        );
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.sub_name, "");
        assert_eq!(form.category_id, None);
    }

    #[test]
    fn test_update_success_message() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1")));

        let effects = update(
            &mut form,
            Msg::MutationSucceeded(MutationOutcome::Updated { refresh: cat("c1") }),
        );
        assert_eq!(effects[0], Effect::Notify(Notification::success(MSG_UPDATED)));
        assert_eq!(form.edit_data, None);
    }

    #[test]
    fn test_delete_success_keeps_form() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::CategorySelected(Some(cat("c1"))));
        update(&mut form, Msg::NameChanged("Half typed".into()));

        let effects = update(
            &mut form,
            Msg::MutationSucceeded(MutationOutcome::Deleted {
                refresh: Some(cat("c1")),
            }),
        );
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notification::success(MSG_DELETED)),
                Effect::FetchSubcategories(cat("c1")),
            ]
        );
        assert_eq!(form.sub_name, "Half typed");
    }

    #[test]
    fn test_failure_keeps_form_and_reports_message() {
        let mut form = SubcategoryForm::default();
        update(&mut form, Msg::Edit(row("s1", "Sneakers", "c1")));
        update(&mut form, Msg::NameChanged("Trainers".into()));
        let before = form.clone();

        let effects = update(
            &mut form,
            Msg::MutationFailed(ApiError::Http {
                status: 409,
                message: Some("Duplicate name".into()),
            }),
        );
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::error("Error: Duplicate name"))]
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_failure_without_server_message() {
        let mut form = SubcategoryForm::default();
        let effects = update(
            &mut form,
            Msg::MutationFailed(ApiError::Network("offline".into())),
        );
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::error(
                "Error: Failed to send request: offline"
            ))]
        );
    }
}

use super::view_model::{update, Effect, Msg, MutationOutcome, SubcategoryForm, CONFIRM_DELETE};
use crate::domain::a001_category::thunks as category_thunks;
use crate::domain::a002_subcategory::thunks;
use crate::shared::catalog_api::CatalogApi;
use crate::shared::confirm::Confirm;
use crate::shared::toast::Notifier;
use crate::store::StoreDispatch;
use std::collections::VecDeque;

/// Collaborators an effect may touch
pub struct EffectContext<'a> {
    pub api: &'a dyn CatalogApi,
    pub store: &'a dyn StoreDispatch,
    pub notifier: &'a dyn Notifier,
    pub confirm: &'a dyn Confirm,
}

/// Perform one effect. Mutations and confirmed prompts answer with the
/// message to feed back into `update`.
pub async fn run_effect(ctx: &EffectContext<'_>, effect: Effect) -> Option<Msg> {
    match effect {
        // Fetch failures land in the store's error slot; no toast.
        Effect::FetchCategories => {
            let _ = category_thunks::fetch_categories(ctx.api, ctx.store).await;
            None
        }
        Effect::FetchSubcategories(category_id) => {
            let _ = thunks::fetch_subcategories(ctx.api, ctx.store, &category_id).await;
            None
        }
        Effect::Create { data, refresh } => {
            Some(match thunks::create_subcategory(ctx.api, ctx.store, &data).await {
                Ok(_) => Msg::MutationSucceeded(MutationOutcome::Added { refresh }),
                Err(e) => Msg::MutationFailed(e),
            })
        }
        Effect::Update { id, data, refresh } => {
            Some(match thunks::update_subcategory(ctx.api, ctx.store, &id, &data).await {
                Ok(_) => Msg::MutationSucceeded(MutationOutcome::Updated { refresh }),
                Err(e) => Msg::MutationFailed(e),
            })
        }
        Effect::ConfirmDelete(id) => ctx
            .confirm
            .confirm(CONFIRM_DELETE)
            .then_some(Msg::DeleteConfirmed(id)),
        Effect::Delete { id, refresh } => {
            Some(match thunks::delete_subcategory(ctx.api, ctx.store, &id).await {
                Ok(()) => Msg::MutationSucceeded(MutationOutcome::Deleted { refresh }),
                Err(e) => Msg::MutationFailed(e),
            })
        }
        Effect::Notify(notification) => {
            ctx.notifier.notify(notification);
            None
        }
    }
}

/// Run `msg` and everything it leads to, one effect at a time.
///
/// The browser view spawns effects independently instead; this sequential
/// driver gives a deterministic order for headless use.
pub async fn process(ctx: &EffectContext<'_>, form: &mut SubcategoryForm, msg: Msg) {
    let mut queue = VecDeque::from([msg]);
    while let Some(msg) = queue.pop_front() {
        for effect in update(form, msg) {
            if let Some(next) = run_effect(ctx, effect).await {
                queue.push_back(next);
            }
        }
    }
}

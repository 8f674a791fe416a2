use crate::auth::use_auth;
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::i18n::use_strings;
use crate::toast::use_toast;
use crate::web;
use leptos::prelude::*;
use leptos::task::spawn_local;
use licensys_shared::Category;
use licensys_shared::protocol::CategoryPayload;

/// 分类管理页
///
/// 列表 + 模态编辑器。每次变更成功后整表重拉，
/// 不做局部更新（悲观一致性）。
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let t = use_strings();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (modal_open, set_modal_open) = signal(false);
    // None 表示新建，Some(id) 表示编辑
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let load_categories = move || {
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            set_loading.set(true);
            spawn_local(async move {
                match api.list_categories().await {
                    Ok(data) => set_categories.set(data),
                    Err(_) => toast.error(t.get_untracked().cat_load_failed),
                }
                set_loading.set(false);
            });
        }
    };

    // 进入页面拉取一次
    Effect::new(move |_| load_categories());

    // 信号与 <dialog> 元素状态同步
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if modal_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let open_create = move |_| {
        set_editing_id.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
        set_modal_open.set(true);
    };

    let open_edit = move |category: Category| {
        set_editing_id.set(Some(category.id));
        set_name.set(category.name);
        set_description.set(category.description);
        set_modal_open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = auth.state.get_untracked();
        let Some(api) = state.api else { return };

        let payload = CategoryPayload {
            name: name.get_untracked(),
            description: description.get_untracked(),
        };
        let editing = editing_id.get_untracked();

        spawn_local(async move {
            let result = match editing {
                Some(id) => api.update_category(id, &payload).await.map(|_| ()),
                None => api.create_category(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toast.success(if editing.is_some() {
                        t.get_untracked().cat_updated
                    } else {
                        t.get_untracked().cat_created
                    });
                    set_modal_open.set(false);
                    load_categories();
                }
                // 失败时模态框保持打开，用户修正后可直接重试
                Err(_) => toast.error(t.get_untracked().cat_save_failed),
            }
        });
    };

    let handle_delete = move |id: i64| {
        // 删除不可撤销，确认框是唯一防线
        if !web::confirm(t.get_untracked().cat_delete_confirm) {
            return;
        }
        let state = auth.state.get_untracked();
        let Some(api) = state.api else { return };
        spawn_local(async move {
            match api.delete_category(id).await {
                Ok(()) => {
                    toast.success(t.get_untracked().cat_deleted);
                    load_categories();
                }
                Err(_) => toast.error(t.get_untracked().cat_delete_failed),
            }
        });
    };

    view! {
        <div class="space-y-6 max-w-5xl mx-auto">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{move || t.get().cat_title}</h1>
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    {move || t.get().cat_add}
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>{move || t.get().cat_name}</th>
                                    <th>{move || t.get().cat_description}</th>
                                    <th class="text-right w-32">{move || t.get().cat_actions}</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && categories.with(Vec::is_empty)>
                                    <tr>
                                        <td colspan="3" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get() && categories.with(Vec::is_empty)>
                                    <tr>
                                        <td colspan="3" class="text-center py-8 text-base-content/50">
                                            {move || t.get().cat_empty}
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || categories.get()
                                    key=|category| category.id
                                    children=move |category| {
                                        let edit_target = category.clone();
                                        let display_description = if category.description.is_empty() {
                                            "-".to_string()
                                        } else {
                                            category.description.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td class="font-medium">{category.name.clone()}</td>
                                                <td class="text-base-content/70">{display_description}</td>
                                                <td class="text-right">
                                                    <div class="flex justify-end gap-1">
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square"
                                                            on:click=move |_| open_edit(edit_target.clone())
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                            on:click=move |_| handle_delete(category.id)
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            // 新建/编辑共用的模态框
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() {
                            t.get().cat_edit_title
                        } else {
                            t.get().cat_new_title
                        }}
                    </h3>
                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label" for="category-name">
                                <span class="label-text">{move || t.get().cat_name}</span>
                            </label>
                            <input
                                id="category-name"
                                type="text"
                                required
                                class="input input-bordered w-full"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="category-description">
                                <span class="label-text">{move || t.get().cat_description}</span>
                            </label>
                            <input
                                id="category-description"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=description
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_modal_open.set(false)
                            >
                                {move || t.get().cancel}
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {move || if editing_id.get().is_some() {
                                    t.get().cat_update
                                } else {
                                    t.get().cat_create
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}

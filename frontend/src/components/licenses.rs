use crate::auth::use_auth;
use crate::components::icons::{ChevronLeft, ChevronRight, Copy, Plus, Search, Trash2};
use crate::i18n::{Strings, use_strings};
use crate::toast::use_toast;
use crate::web::{self, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use licensys_shared::protocol::{LicenseQuery, StatusFilter};
use licensys_shared::{Category, License, LicenseStatus, PaginatedResponse};

/// 搜索输入的防抖窗口（毫秒）
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// 密钥列只展示前 8 个字符
fn key_preview(key: &str) -> String {
    match key.char_indices().nth(8) {
        Some((idx, _)) => format!("{}...", &key[..idx]),
        None => key.to_string(),
    }
}

fn status_badge_class(status: LicenseStatus) -> &'static str {
    match status {
        LicenseStatus::Used => "badge badge-success",
        LicenseStatus::Active => "badge badge-info",
        LicenseStatus::Inactive => "badge badge-error",
    }
}

fn status_label(status: LicenseStatus, strings: &'static Strings) -> &'static str {
    match status {
        LicenseStatus::Used => strings.lic_status_used,
        LicenseStatus::Active => strings.lic_status_active,
        LicenseStatus::Inactive => strings.lic_status_inactive,
    }
}

/// 许可证管理页
///
/// 组合查询（防抖搜索 + 分类过滤 + 状态过滤 + 页码）驱动列表，
/// 搜索或过滤条件变化时页码重置为 1，避免落在越界页上。
#[component]
pub fn LicensesPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let t = use_strings();

    let (data, set_data) = signal(Option::<PaginatedResponse<License>>::None);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);

    // 查询维度。search_input 是输入框即时值，search 是防抖后的生效值
    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal(Option::<i64>::None);
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (page, set_page) = signal(1u32);
    // 变更成功后的手动重拉信号
    let (refresh, set_refresh) = signal(0u32);

    let (modal_open, set_modal_open) = signal(false);
    let (gen_category, set_gen_category) = signal(Option::<i64>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 请求代际：响应只在代际仍为最新时生效。视图卸载后代际
    // 不再可读，迟到的响应同样被丢弃，不会写入已销毁的信号。
    let generation = StoredValue::new(0u64);
    // 挂起的防抖定时器；用新实例覆盖即取消旧窗口
    let debounce = StoredValue::new_local(Option::<Timeout>::None);

    // 卸载时取消挂起的防抖触发
    on_cleanup(move || debounce.set_value(None));

    // 任一查询维度变化都会重新拉取。许可证分页与分类下拉
    // 并发请求，两者都就绪后才一并渲染，不做半侧更新。
    Effect::new(move |_| {
        let query = LicenseQuery {
            search: search.get(),
            category: category_filter.get(),
            status: status_filter.get(),
            page: page.get(),
        };
        refresh.track();

        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let (licenses, cats) =
                futures::join!(api.list_licenses(&query), api.list_categories());

            // 过期响应：其间已有更新的请求发出（或视图已卸载）
            if generation.try_get_value() != Some(issued) {
                return;
            }

            match (licenses, cats) {
                (Ok(page_data), Ok(category_list)) => {
                    set_data.set(Some(page_data));
                    set_categories.set(category_list);
                }
                _ => toast.error(t.get_untracked().lic_load_failed),
            }
            set_loading.set(false);
        });
    });

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

    let on_search_input = move |ev| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        // 重置防抖窗口：旧定时器 drop 即取消，连续按键只触发一次拉取
        debounce.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            set_page.set(1);
            set_search.set(value.clone());
        })));
    };

    let on_category_change = move |ev| {
        set_category_filter.set(event_target_value(&ev).parse::<i64>().ok());
        set_page.set(1);
    };

    let on_status_change = move |ev| {
        set_status_filter.set(StatusFilter::from_str(&event_target_value(&ev)));
        set_page.set(1);
    };

    let on_prev = move |_| {
        set_page.update(|p| {
            if *p > 1 {
                *p -= 1;
            }
        });
    };
    let on_next = move |_| set_page.update(|p| *p += 1);

    let open_generate = move |_| {
        set_gen_category.set(None);
        set_modal_open.set(true);
    };

    let on_generate = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        // 未选择分类：校验失败，不发出任何网络请求
        let Some(category) = gen_category.get_untracked() else {
            toast.error(t.get_untracked().lic_select_category);
            return;
        };
        let state = auth.state.get_untracked();
        let Some(api) = state.api else { return };

        spawn_local(async move {
            match api.create_license(category).await {
                Ok(_) => {
                    toast.success(t.get_untracked().lic_generated);
                    set_modal_open.set(false);
                    set_gen_category.set(None);
                    set_refresh.update(|n| *n += 1);
                }
                Err(_) => toast.error(t.get_untracked().lic_generate_failed),
            }
        });
    };

    let handle_delete = move |id: i64| {
        // 删除不可撤销，确认框是唯一防线
        if !web::confirm(t.get_untracked().lic_delete_confirm) {
            return;
        }
        let state = auth.state.get_untracked();
        let Some(api) = state.api else { return };
        spawn_local(async move {
            match api.delete_license(id).await {
                Ok(()) => {
                    toast.success(t.get_untracked().lic_deleted);
                    set_refresh.update(|n| *n += 1);
                }
                Err(_) => toast.error(t.get_untracked().lic_delete_failed),
            }
        });
    };

    let copy_key = move |key: String| {
        web::copy_text(&key);
        toast.success(t.get_untracked().lic_copied);
    };

    view! {
        <div class="space-y-6 max-w-7xl mx-auto">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <h1 class="text-3xl font-bold">{move || t.get().lic_title}</h1>
                <button class="btn btn-primary gap-2" on:click=open_generate>
                    <Plus attr:class="h-4 w-4" />
                    {move || t.get().lic_generate}
                </button>
            </div>

            // 查询条：搜索 + 分类过滤 + 状态过滤
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div class="relative col-span-1 md:col-span-2">
                    <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="input input-bordered w-full pl-10"
                        placeholder=move || t.get().lic_search_placeholder
                        prop:value=search_input
                        on:input=on_search_input
                    />
                </div>
                <select class="select select-bordered w-full" on:change=on_category_change>
                    <option value="all" selected=move || category_filter.get().is_none()>
                        {move || t.get().lic_all_categories}
                    </option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=move |category| {
                            let id = category.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || category_filter.get() == Some(id)
                                >
                                    {category.name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
                <select class="select select-bordered w-full" on:change=on_status_change>
                    <option value="all" selected=move || status_filter.get() == StatusFilter::All>
                        {move || t.get().lic_all_status}
                    </option>
                    <option value="active" selected=move || status_filter.get() == StatusFilter::Active>
                        {move || t.get().lic_status_active}
                    </option>
                    <option value="used" selected=move || status_filter.get() == StatusFilter::Used>
                        {move || t.get().lic_status_used}
                    </option>
                </select>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>{move || t.get().lic_key}</th>
                                    <th>{move || t.get().lic_category}</th>
                                    <th>{move || t.get().lic_status}</th>
                                    <th class="hidden md:table-cell">{move || t.get().lic_device}</th>
                                    <th class="text-right w-24">{move || t.get().lic_actions}</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && data.get().is_none()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || {
                                    !loading.get()
                                        && data.with(|d| d.as_ref().is_none_or(|p| p.results.is_empty()))
                                }>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            {move || t.get().lic_empty}
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || data.get().map(|d| d.results).unwrap_or_default()
                                    key=|license| license.id
                                    children=move |license| {
                                        let status = license.status();
                                        let key_full = license.key.clone();
                                        let device = license
                                            .device_id
                                            .clone()
                                            .unwrap_or_else(|| "-".to_string());
                                        let category_name = if license.category_name.is_empty() {
                                            "-".to_string()
                                        } else {
                                            license.category_name.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs">
                                                    <div class="flex items-center gap-2">
                                                        {key_preview(&license.key)}
                                                        <button
                                                            class="btn btn-ghost btn-xs btn-square"
                                                            on:click=move |_| copy_key(key_full.clone())
                                                        >
                                                            <Copy attr:class="h-3 w-3" />
                                                        </button>
                                                    </div>
                                                </td>
                                                <td>{category_name}</td>
                                                <td>
                                                    <span class=status_badge_class(status)>
                                                        {move || status_label(status, t.get())}
                                                    </span>
                                                </td>
                                                <td class="hidden md:table-cell font-mono text-xs">
                                                    {device}
                                                </td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        on:click=move |_| handle_delete(license.id)
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
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

            // 翻页条：可用性完全由服务端的 next/previous 决定，
            // 总页数展示只是推算值
            {move || {
                data.get().filter(|d| d.count > 0).map(|d| {
                    let current_page = page.get();
                    let total_pages = d.total_pages();
                    let count = d.count;
                    let prev_disabled = d.previous.is_none() || loading.get();
                    let next_disabled = d.next.is_none() || loading.get();
                    view! {
                        <div class="flex items-center justify-between px-2">
                            <div class="text-sm text-base-content/60">
                                {move || t.get().lic_page} " " {current_page} " / " {total_pages}
                                " (" {count} " " {move || t.get().lic_items} ")"
                            </div>
                            <div class="flex items-center gap-2">
                                <button
                                    class="btn btn-outline btn-sm gap-1"
                                    disabled=prev_disabled
                                    on:click=on_prev
                                >
                                    <ChevronLeft attr:class="h-4 w-4" />
                                    {move || t.get().lic_prev}
                                </button>
                                <button
                                    class="btn btn-outline btn-sm gap-1"
                                    disabled=next_disabled
                                    on:click=on_next
                                >
                                    {move || t.get().lic_next}
                                    <ChevronRight attr:class="h-4 w-4" />
                                </button>
                            </div>
                        </div>
                    }
                })
            }}

            // 生成许可证的模态框
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{move || t.get().lic_generate}</h3>
                    <form on:submit=on_generate class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label" for="generate-category">
                                <span class="label-text">{move || t.get().lic_category}</span>
                            </label>
                            <select
                                id="generate-category"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    set_gen_category.set(event_target_value(&ev).parse::<i64>().ok());
                                }
                            >
                                <option value="" disabled selected=move || gen_category.get().is_none()>
                                    {move || t.get().lic_select_category}
                                </option>
                                <For
                                    each=move || categories.get()
                                    key=|category| category.id
                                    children=move |category| {
                                        let id = category.id;
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || gen_category.get() == Some(id)
                                            >
                                                {category.name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
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
                                {move || t.get().lic_generate}
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

#[cfg(test)]
mod tests;

use crate::auth::{login, use_auth};
use crate::components::icons::{AlertCircle, ShieldCheck};
use crate::i18n::use_strings;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
///
/// 状态机：`idle -> submitting -> {authenticated | error}`。
/// 成功后的跳转由路由服务监听认证状态自动完成。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let t = use_strings();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (has_error, set_has_error) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // submitting 状态下禁止重复提交
        if is_submitting.get_untracked() {
            return;
        }
        // 必填校验：空值直接拦截，不发起请求
        if username.get_untracked().is_empty() || password.get_untracked().is_empty() {
            return;
        }

        set_is_submitting.set(true);
        set_has_error.set(false);

        spawn_local(async move {
            let result = login(
                &auth,
                username.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if result.is_err() {
                // 单条通用错误消息，不区分失败原因
                set_has_error.set(true);
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{move || t.get().login_title}</h1>
                        <p class="text-base-content/70">{move || t.get().login_subtitle}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || has_error.get()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertCircle attr:class="h-5 w-5 shrink-0" />
                                <span>{move || t.get().login_error}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">{move || t.get().login_username}</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || t.get().login_password}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        {t.get().login_submitting}
                                    }
                                    .into_any()
                                } else {
                                    t.get().login_submit.into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

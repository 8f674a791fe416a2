use crate::auth::use_auth;
use crate::components::charts::{CategoryBarChart, RequestsLineChart};
use crate::components::icons::{CheckCircle, Key, Smartphone, Zap};
use crate::i18n::use_strings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use licensys_shared::DashboardStats;

/// 控制面板
///
/// 进入页面拉取一次聚合统计，只读展示，无交互。
/// 拉取失败仅记录日志，页面停留在加载态（已知缺口，无重试入口）。
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let t = use_strings();

    let (stats, set_stats) = signal(Option::<DashboardStats>::None);

    Effect::new(move |_| {
        let state = auth.state.get();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.stats().await {
                    Ok(data) => set_stats.set(Some(data)),
                    Err(err) => {
                        web_sys::console::error_1(&format!("stats fetch failed: {err}").into());
                    }
                }
            });
        }
    });

    view! {
        <div class="space-y-6 max-w-7xl mx-auto">
            <h1 class="text-3xl font-bold">{move || t.get().dash_title}</h1>

            {move || match stats.get() {
                None => view! {
                    <div class="flex justify-center py-24">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
                .into_any(),
                Some(data) => view! {
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-figure text-primary">
                                <Key attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">{move || t.get().dash_total}</div>
                            <div class="stat-value text-primary">{data.overall.total_licenses}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-success">
                                <CheckCircle attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">{move || t.get().dash_active}</div>
                            <div class="stat-value text-success">{data.overall.active_licenses}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-error">
                                <Smartphone attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">{move || t.get().dash_used}</div>
                            <div class="stat-value text-error">{data.overall.used_licenses}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-warning">
                                <Zap attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">{move || t.get().dash_avg_response}</div>
                            <div class="stat-value text-warning">
                                {format!("{:.0} ms", data.overall.avg_response_time)}
                            </div>
                        </div>
                    </div>

                    <div class="grid gap-6 lg:grid-cols-2 mt-6">
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">{move || t.get().dash_requests_chart}</h2>
                                <RequestsLineChart data=data.daily_requests.clone() />
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">{move || t.get().dash_category_chart}</h2>
                                <CategoryBarChart data=data.category_stats.clone() />
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

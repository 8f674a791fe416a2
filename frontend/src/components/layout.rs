//! 受保护页面的统一布局：侧边栏 + 内容区
//!
//! 侧边栏承载导航、语言切换与注销；小屏下折叠为抽屉。

use crate::auth::{logout, use_auth};
use crate::components::icons::{Grid, Home, Key, Languages, LogOut, Menu};
use crate::i18n::{Lang, use_lang, use_strings};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let lang = use_lang();
    let t = use_strings();
    let router = use_router();

    let (drawer_open, set_drawer_open) = signal(false);

    // 导航后收起抽屉（大屏下无感知）
    let go = move |route: AppRoute| {
        router.navigate(route.to_path());
        set_drawer_open.set(false);
    };
    let link_class = move |route: AppRoute| {
        if router.current_route().get() == route {
            "active"
        } else {
            ""
        }
    };

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input
                id="app-drawer"
                type="checkbox"
                class="drawer-toggle"
                prop:checked=drawer_open
                on:change=move |ev| set_drawer_open.set(event_target_checked(&ev))
            />
            <div class="drawer-content p-4 md:p-8">
                <label for="app-drawer" class="btn btn-ghost btn-square drawer-button lg:hidden mb-4">
                    <Menu attr:class="h-6 w-6" />
                </label>
                {children()}
            </div>
            <div class="drawer-side z-40">
                <label for="app-drawer" class="drawer-overlay"></label>
                <aside class="w-64 min-h-full bg-base-100 flex flex-col p-4">
                    <div class="flex items-center gap-2 text-xl font-bold text-primary mb-8 px-2">
                        <Key attr:class="h-6 w-6" />
                        {move || t.get().app_title}
                    </div>

                    <ul class="menu gap-1 flex-1 p-0">
                        <li>
                            <a class=move || link_class(AppRoute::Dashboard) on:click=move |_| go(AppRoute::Dashboard)>
                                <Home attr:class="h-4 w-4" />
                                {move || t.get().nav_dashboard}
                            </a>
                        </li>
                        <li>
                            <a class=move || link_class(AppRoute::Categories) on:click=move |_| go(AppRoute::Categories)>
                                <Grid attr:class="h-4 w-4" />
                                {move || t.get().nav_categories}
                            </a>
                        </li>
                        <li>
                            <a class=move || link_class(AppRoute::Licenses) on:click=move |_| go(AppRoute::Licenses)>
                                <Key attr:class="h-4 w-4" />
                                {move || t.get().nav_licenses}
                            </a>
                        </li>
                    </ul>

                    <div class="mt-auto space-y-2">
                        <div class="divider my-0"></div>
                        <div class="dropdown dropdown-top w-full">
                            <div tabindex="0" role="button" class="btn btn-ghost btn-sm w-full justify-start gap-2">
                                <Languages attr:class="h-4 w-4" />
                                {move || lang.get().label()}
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-40">
                                <li><a on:click=move |_| lang.switch(Lang::En)>"English"</a></li>
                                <li><a on:click=move |_| lang.switch(Lang::Vi)>"Tiếng Việt"</a></li>
                            </ul>
                        </div>
                        <button class="btn btn-outline btn-error btn-sm w-full justify-start gap-2" on:click=move |_| logout(&auth)>
                            <LogOut attr:class="h-4 w-4" />
                            {move || t.get().logout}
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}

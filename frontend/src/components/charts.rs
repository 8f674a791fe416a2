//! SVG 统计图组件
//!
//! 两张图都直接以内联 SVG 渲染，交互仅限被动的 `<title>` 提示。

use leptos::prelude::*;
use licensys_shared::{CategoryStat, DailyRequest};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PAD_X: f64 = 40.0;
const PAD_Y: f64 = 24.0;

/// 条形图的循环配色
const BAR_COLORS: [&str; 5] = ["#0088fe", "#00c49f", "#ffbb28", "#ff8042", "#8884d8"];

/// 把数值映射到绘图区 Y 坐标（SVG 的 Y 轴向下）
fn y_pos(value: f64, max: f64) -> f64 {
    HEIGHT - PAD_Y - value / max * (HEIGHT - 2.0 * PAD_Y)
}

/// 横向网格线与 Y 轴刻度
fn grid_lines(max: f64) -> impl IntoView {
    (0..=4u32)
        .map(|i| {
            let value = max * f64::from(i) / 4.0;
            let y = y_pos(value, max);
            view! {
                <g>
                    <line
                        x1=format!("{PAD_X}")
                        y1=format!("{y:.1}")
                        x2=format!("{}", WIDTH - PAD_X)
                        y2=format!("{y:.1}")
                        stroke="currentColor"
                        stroke-dasharray="3 3"
                        class="opacity-10"
                    />
                    <text
                        x=format!("{}", PAD_X - 6.0)
                        y=format!("{:.1}", y + 4.0)
                        text-anchor="end"
                        font-size="11"
                        class="fill-current opacity-60"
                    >
                        {format!("{value:.0}")}
                    </text>
                </g>
            }
        })
        .collect_view()
}

/// 每日请求量折线图
#[component]
pub fn RequestsLineChart(data: Vec<DailyRequest>) -> impl IntoView {
    let max = data.iter().map(|d| d.count).max().unwrap_or(0).max(1) as f64;
    let step = if data.len() > 1 {
        (WIDTH - 2.0 * PAD_X) / (data.len() - 1) as f64
    } else {
        0.0
    };
    let x_pos = move |index: usize| PAD_X + step * index as f64;

    let points = data
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{:.1},{:.1}", x_pos(i), y_pos(d.count as f64, max)))
        .collect::<Vec<_>>()
        .join(" ");

    let markers = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let cx = x_pos(i);
            let cy = y_pos(d.count as f64, max);
            let tip = format!("{}: {} ({:.0} ms)", d.date, d.count, d.avg_time);
            view! {
                <circle cx=format!("{cx:.1}") cy=format!("{cy:.1}") r="3" class="fill-primary">
                    <title>{tip}</title>
                </circle>
            }
        })
        .collect_view();

    let first_label = data.first().map(|d| d.date.clone()).unwrap_or_default();
    let last_label = data.last().map(|d| d.date.clone()).unwrap_or_default();

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="w-full h-64" role="img">
            {grid_lines(max)}
            <polyline
                points=points
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                class="text-primary"
            />
            {markers}
            <text
                x=format!("{PAD_X}")
                y=format!("{}", HEIGHT - 4.0)
                font-size="11"
                class="fill-current opacity-60"
            >
                {first_label}
            </text>
            <text
                x=format!("{}", WIDTH - PAD_X)
                y=format!("{}", HEIGHT - 4.0)
                text-anchor="end"
                font-size="11"
                class="fill-current opacity-60"
            >
                {last_label}
            </text>
        </svg>
    }
}

/// 按分类分布的条形图
#[component]
pub fn CategoryBarChart(data: Vec<CategoryStat>) -> impl IntoView {
    let max = data.iter().map(|d| d.count).max().unwrap_or(0).max(1) as f64;
    let slot = (WIDTH - 2.0 * PAD_X) / data.len().max(1) as f64;
    let bar_width = (slot * 0.6).min(48.0);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let bar_height = stat.count as f64 / max * (HEIGHT - 2.0 * PAD_Y);
            let x = PAD_X + slot * i as f64 + (slot - bar_width) / 2.0;
            let y = HEIGHT - PAD_Y - bar_height;
            let center = PAD_X + slot * i as f64 + slot / 2.0;
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            let tip = format!("{}: {}", stat.category_name, stat.count);
            let label = stat.category_name.clone();
            view! {
                <g>
                    <rect
                        x=format!("{x:.1}")
                        y=format!("{y:.1}")
                        width=format!("{bar_width:.1}")
                        height=format!("{bar_height:.1}")
                        rx="4"
                        fill=color
                    >
                        <title>{tip}</title>
                    </rect>
                    <text
                        x=format!("{center:.1}")
                        y=format!("{}", HEIGHT - 4.0)
                        text-anchor="middle"
                        font-size="11"
                        class="fill-current opacity-60"
                    >
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="w-full h-64" role="img">
            {grid_lines(max)}
            {bars}
        </svg>
    }
}

#[cfg(test)]
mod tests;

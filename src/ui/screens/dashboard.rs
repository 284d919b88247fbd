use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatCard {
    Total,
    Orders,
    Value,
    Warning,
}

struct TrendRow {
    label: &'static str,
    value: &'static str,
}

/// 仪表盘：经营概览卡片与明细面板（演示数据）。
#[component]
pub fn DashboardScreen() -> Element {
    let mut selected = use_signal(|| StatCard::Total);
    let current = selected();

    let card_style = |card: StatCard| {
        if current == card {
            "flex: 1; background: #fff; border-radius: 8px; padding: 16px; cursor: pointer; border: 2px solid #4c6ef5;"
        } else {
            "flex: 1; background: #fff; border-radius: 8px; padding: 16px; cursor: pointer; border: 2px solid transparent;"
        }
    };

    let (panel_title, rows) = match current {
        StatCard::Total => (
            "库存总量趋势",
            vec![
                TrendRow { label: "1月", value: "12,000" },
                TrendRow { label: "2月", value: "12,480" },
                TrendRow { label: "3月", value: "12,800" },
                TrendRow { label: "4月", value: "13,000" },
                TrendRow { label: "5月", value: "13,200" },
                TrendRow { label: "6月", value: "13,400" },
            ],
        ),
        StatCard::Orders => (
            "订单趋势",
            vec![
                TrendRow { label: "今日完成", value: "142" },
                TrendRow { label: "进行中", value: "14" },
                TrendRow { label: "昨日完成", value: "128" },
                TrendRow { label: "本周累计", value: "865" },
            ],
        ),
        StatCard::Value => (
            "库存总价值变化",
            vec![
                TrendRow { label: "1月", value: "¥ 800,000" },
                TrendRow { label: "2月", value: "¥ 820,000" },
                TrendRow { label: "3月", value: "¥ 840,000" },
                TrendRow { label: "4月", value: "¥ 852,000" },
            ],
        ),
        StatCard::Warning => (
            "库存预警明细",
            vec![
                TrendRow { label: "A品类", value: "2 项" },
                TrendRow { label: "B品类", value: "3 项" },
                TrendRow { label: "C品类", value: "1 项" },
                TrendRow { label: "D品类", value: "6 项" },
            ],
        ),
    };

    rsx! {
        div {
            h2 { style: "margin: 0 0 16px;", "仪表盘" }

            div { style: "display: flex; gap: 16px;",
                div {
                    style: card_style(StatCard::Total),
                    onclick: move |_| selected.set(StatCard::Total),
                    div { style: "color: #999; font-size: 13px;", "库存总量" }
                    div { style: "font-size: 28px; font-weight: 700; margin-top: 8px;", "12,480" }
                    div { style: "margin-top: 8px; font-size: 12px;",
                        span { style: "color: #2d7a36;", "↑ +2.4%" }
                        span { style: "color: #bbb; margin-left: 8px;", "较昨日" }
                    }
                }
                div {
                    style: card_style(StatCard::Orders),
                    onclick: move |_| selected.set(StatCard::Orders),
                    div { style: "display: flex; justify-content: space-between;",
                        span { style: "color: #999; font-size: 13px;", "订单趋势" }
                        span { style: "font-size: 12px; color: #2a5ad9; background: #eef4ff; border-radius: 10px; padding: 1px 8px;", "进行中" }
                    }
                    div { style: "font-size: 28px; font-weight: 700; margin-top: 8px;", "156" }
                    div { style: "margin-top: 8px; font-size: 12px; color: #bbb;", "今日已完成: 142" }
                }
                div {
                    style: card_style(StatCard::Value),
                    onclick: move |_| selected.set(StatCard::Value),
                    div { style: "color: #999; font-size: 13px;", "库存总价值" }
                    div { style: "font-size: 28px; font-weight: 700; margin-top: 8px;", "¥ 852,000" }
                    div { style: "margin-top: 8px; font-size: 12px; color: #bbb;", "实时估值资产" }
                }
                div {
                    style: card_style(StatCard::Warning),
                    onclick: move |_| selected.set(StatCard::Warning),
                    div { style: "color: #999; font-size: 13px;", "库存预警" }
                    div { style: "font-size: 28px; font-weight: 700; margin-top: 8px; color: #c2373f;", "12" }
                    div { style: "margin-top: 8px; font-size: 12px; color: #c2373f; font-weight: 600;", "需要紧急补货" }
                }
            }

            div {
                style: "margin-top: 24px; background: #fff; border-radius: 8px; padding: 20px; min-height: 280px;",
                div { style: "font-weight: 700; margin-bottom: 12px;", "{panel_title}" }
                div { style: "display: flex; flex-direction: column; gap: 8px;",
                    {rows.iter().map(|row| {
                        rsx!(
                            div { style: "display: flex; justify-content: space-between; border-bottom: 1px solid #f5f5f5; padding: 8px 4px;",
                                span { style: "color: #666;", "{row.label}" }
                                span { style: "font-weight: 600;", "{row.value}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}

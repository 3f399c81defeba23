// KPI domain models - remote summary record and static tile content
use super::widget::WidgetId;
use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate record returned by the KPI endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(rename = "faturamento_bruto")]
    pub gross_revenue: f64,
    #[serde(rename = "total_descontos")]
    pub total_discounts: f64,
    #[serde(rename = "total_devolucoes")]
    pub total_returns: f64,
    #[serde(rename = "faturamento_liquido")]
    pub net_revenue: f64,
    #[serde(rename = "ticket_medio")]
    pub average_ticket: f64,
    #[serde(rename = "lucratividade_media")]
    pub average_profitability: f64,
    #[serde(rename = "total_pedidos_vendas", deserialize_with = "deserialize_count")]
    pub total_orders: u64,
}

/// Counts may arrive as JSON floats (`1847.0`); they are rounded, negatives floor at zero
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!("invalid count: {value}")));
    }
    Ok(value.round().max(0.0) as u64)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub accent: &'static str,
}

impl KpiSummary {
    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard {
                label: "Faturamento Líquido",
                value: format_currency_brl(self.net_revenue),
                accent: "text-green-400",
            },
            SummaryCard {
                label: "Ticket Médio",
                value: format_currency_brl(self.average_ticket),
                accent: "text-white",
            },
            SummaryCard {
                label: "Total de Vendas",
                value: group_thousands(self.total_orders),
                accent: "text-white",
            },
            SummaryCard {
                label: "Lucratividade Média",
                value: format!("{:.2}%", self.average_profitability * 100.0),
                accent: "text-yellow-400",
            },
        ]
    }
}

/// pt-BR currency, e.g. `R$ 1.234,56` (non-breaking space after the symbol)
pub fn format_currency_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$\u{a0}NaN".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// pt-BR integer grouping with `.` as the thousands separator
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Static headline shown inside a `kpi` widget card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiTile {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const KPI_TILES: [KpiTile; 4] = [
    KpiTile {
        title: "Faturamento",
        value: "R$ 125.430",
        change: "+12.5%",
        icon: "dollar-sign",
        color: "from-emerald-500 to-teal-600",
    },
    KpiTile {
        title: "Pedidos",
        value: "1.847",
        change: "+8.2%",
        icon: "shopping-cart",
        color: "from-blue-500 to-indigo-600",
    },
    KpiTile {
        title: "Clientes",
        value: "892",
        change: "+15.3%",
        icon: "users",
        color: "from-purple-500 to-violet-600",
    },
    KpiTile {
        title: "Conversão",
        value: "3.2%",
        change: "+0.8%",
        icon: "trending-up",
        color: "from-orange-500 to-red-600",
    },
];

impl KpiTile {
    /// Presentation-only lookup: numeric prefix of the id (byte sum otherwise) mod tile count
    pub fn for_widget(id: &WidgetId) -> &'static KpiTile {
        let digits: String = id
            .as_str()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let key = match digits.parse::<u128>() {
            Ok(n) => (n % KPI_TILES.len() as u128) as usize,
            Err(_) => id.as_str().bytes().map(usize::from).sum::<usize>(),
        };
        &KPI_TILES[key % KPI_TILES.len()]
    }
}

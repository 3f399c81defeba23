// Static chart datasets handed to the renderer
use super::widget::WidgetKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesPoint {
    pub month: &'static str,
    pub sales: u32,
    pub orders: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub name: &'static str,
    pub value: u32,
    pub status: &'static str,
}

pub const MONTHLY_SALES: [SalesPoint; 6] = [
    SalesPoint { month: "Jan", sales: 4000, orders: 240 },
    SalesPoint { month: "Feb", sales: 3000, orders: 198 },
    SalesPoint { month: "Mar", sales: 5000, orders: 300 },
    SalesPoint { month: "Apr", sales: 4500, orders: 278 },
    SalesPoint { month: "May", sales: 6000, orders: 389 },
    SalesPoint { month: "Jun", sales: 5500, orders: 349 },
];

pub const PRODUCT_BREAKDOWN: [ProductShare; 4] = [
    ProductShare { name: "Produto A", value: 400, color: "#8884d8" },
    ProductShare { name: "Produto B", value: 300, color: "#82ca9d" },
    ProductShare { name: "Produto C", value: 200, color: "#ffc658" },
    ProductShare { name: "Produto D", value: 100, color: "#ff7c7c" },
];

impl ProductShare {
    pub fn status(&self) -> &'static str {
        if self.value > 300 {
            "Alto"
        } else if self.value > 200 {
            "Médio"
        } else {
            "Baixo"
        }
    }
}

/// Renderer input: which static series a chart kind plots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Dataset {
    MonthlySales {
        series: &'static [SalesPoint],
        data_key: &'static str,
    },
    ProductBreakdown {
        slices: &'static [ProductShare],
    },
    ProductTable {
        rows: Vec<ProductRow>,
    },
}

impl Dataset {
    /// `None` for kinds that render without a chart dataset (kpi)
    pub fn for_kind(kind: WidgetKind) -> Option<Dataset> {
        match kind {
            WidgetKind::Kpi => None,
            WidgetKind::Line => Some(Dataset::MonthlySales {
                series: &MONTHLY_SALES,
                data_key: "sales",
            }),
            WidgetKind::Bar => Some(Dataset::MonthlySales {
                series: &MONTHLY_SALES,
                data_key: "orders",
            }),
            WidgetKind::Pie => Some(Dataset::ProductBreakdown {
                slices: &PRODUCT_BREAKDOWN,
            }),
            WidgetKind::Table => Some(Dataset::ProductTable {
                rows: PRODUCT_BREAKDOWN
                    .iter()
                    .map(|p| ProductRow {
                        name: p.name,
                        value: p.value,
                        status: p.status(),
                    })
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_thresholds() {
        let statuses: Vec<&str> = PRODUCT_BREAKDOWN.iter().map(|p| p.status()).collect();
        assert_eq!(statuses, vec!["Alto", "Médio", "Baixo", "Baixo"]);
    }

    #[test]
    fn test_line_and_bar_plot_different_keys() {
        match Dataset::for_kind(WidgetKind::Bar) {
            Some(Dataset::MonthlySales { data_key, series }) => {
                assert_eq!(data_key, "orders");
                assert_eq!(series.len(), 6);
            }
            other => panic!("unexpected dataset: {:?}", other),
        }
        assert!(Dataset::for_kind(WidgetKind::Kpi).is_none());
    }

    #[test]
    fn test_dataset_serializes_with_shape_tag() {
        let json = serde_json::to_value(Dataset::for_kind(WidgetKind::Pie).unwrap()).unwrap();
        assert_eq!(json["shape"], "product_breakdown");
        assert_eq!(json["slices"][0]["color"], "#8884d8");
    }
}

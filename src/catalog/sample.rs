//! Built-in reference data used when no catalog file is configured.

use crate::domain::{ColorShade, Product};

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/60b31cd1-0092-4c8c-8229-37090acd3fe8/files";

fn image(file: &str) -> String {
    format!("{}/{}.jpg", IMAGE_BASE, file)
}

const PIGMENT_IMAGE: &str = "655ad01c-2875-427b-b4f0-adba57c4f500";
const CREAM_IMAGE: &str = "d2d44684-430d-443b-a33a-a596627b58f8";
const POWDER_IMAGE: &str = "98f15a3a-f43a-4998-b399-1c7e51f4e5fc";

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "DROPURE Концентрированный пигмент", "BBcos", "Окрашивание", 1850)
            .with_image(image(PIGMENT_IMAGE))
            .with_volume("100 мл")
            .with_description(
                "Концентрированные пигменты прямого действия для создания ярких и пастельных оттенков. \
                 Идеальны для техник балаяж, омбре и креативного окрашивания.",
            )
            .with_features([
                "Не требует смешивания с оксидантом",
                "Яркие насыщенные цвета",
                "Можно смешивать между собой",
                "Работает на любом уровне тона",
            ])
            .with_usage("Наносить на чистые влажные волосы. Время выдержки 20-30 минут. Смывать водой без шампуня."),
        Product::new(2, "Innovation EVO Крем-краска", "BBcos", "Окрашивание", 420)
            .with_image(image(CREAM_IMAGE))
            .with_volume("100 мл")
            .with_description(
                "Профессиональная крем-краска нового поколения с системой защиты цвета. \
                 Обеспечивает 100% закрашивание седины и стойкий результат.",
            )
            .with_features([
                "100% закрашивание седины",
                "Стойкий результат до 8 недель",
                "Мягкая кремовая текстура",
                "Без аммиака",
            ])
            .with_usage("Смешать с оксидантом 1:1.5. Нанести на сухие волосы. Время выдержки 35-40 минут."),
        Product::new(3, "White Meches Осветляющая пудра", "BBcos", "Осветление", 1290)
            .with_sale(990)
            .with_image(image(POWDER_IMAGE))
            .with_volume("500 г"),
        Product::new(4, "Green Care Essence Маска питательная", "BBcos", "Уход", 2150)
            .with_image(image(CREAM_IMAGE))
            .with_volume("250 мл"),
        Product::new(5, "PRODIVA Шампунь восстанавливающий", "PRODIVA", "Уход", 890)
            .with_image(image(PIGMENT_IMAGE))
            .with_volume("300 мл"),
        Product::new(6, "Keratin Color Краска с кератином", "BBcos", "Окрашивание", 485)
            .with_sale(399)
            .with_image(image(POWDER_IMAGE))
            .with_volume("100 мл"),
        Product::new(7, "New.Fix Лак для волос сильной фиксации", "BBcos", "Стайлинг", 1250)
            .with_image(image(PIGMENT_IMAGE))
            .with_volume("400 мл"),
        Product::new(8, "KristalE Масло для блеска волос", "BBcos", "Уход", 1890)
            .with_image(image(CREAM_IMAGE))
            .with_volume("125 мл"),
    ]
}

pub fn shades() -> Vec<ColorShade> {
    [
        ("1.0", "Черный", "#1a1a1a", "Натуральные"),
        ("2.0", "Темно-коричневый", "#2d1f1a", "Натуральные"),
        ("3.0", "Темно-каштановый", "#3d2a1f", "Натуральные"),
        ("4.0", "Каштановый", "#5c3d2e", "Натуральные"),
        ("5.0", "Светло-каштановый", "#7a5547", "Натуральные"),
        ("6.0", "Темно-русый", "#8b6f5c", "Натуральные"),
        ("7.0", "Русый", "#a4866f", "Натуральные"),
        ("8.0", "Светло-русый", "#c3a892", "Натуральные"),
        ("9.0", "Очень светло-русый", "#dcc5ad", "Натуральные"),
        ("10.0", "Платиновый блонд", "#f0dfc8", "Натуральные"),
        ("6.3", "Темно-русый золотистый", "#a67c4f", "Золотистые"),
        ("7.3", "Русый золотистый", "#c8995e", "Золотистые"),
        ("8.3", "Светло-русый золотистый", "#d9b482", "Золотистые"),
        ("9.3", "Блонд золотистый", "#e8ca9f", "Золотистые"),
        ("6.4", "Темно-русый медный", "#9d5a3c", "Медные"),
        ("7.4", "Русый медный", "#b5704e", "Медные"),
        ("8.4", "Светло-русый медный", "#c88860", "Медные"),
        ("6.5", "Темно-русый махагон", "#7a3d3d", "Красные"),
        ("7.5", "Русый махагон", "#925454", "Красные"),
        ("6.6", "Темно-русый красный", "#8b3333", "Красные"),
        ("7.6", "Русый красный", "#a04747", "Красные"),
        ("6.1", "Темно-русый пепельный", "#6d6963", "Пепельные"),
        ("7.1", "Русый пепельный", "#857f77", "Пепельные"),
        ("8.1", "Светло-русый пепельный", "#a39d94", "Пепельные"),
        ("9.1", "Блонд пепельный", "#bdb8ae", "Пепельные"),
    ]
    .into_iter()
    .map(|(code, name, hex, category)| ColorShade::new(code, name, hex, category, "BBcos"))
    .collect()
}

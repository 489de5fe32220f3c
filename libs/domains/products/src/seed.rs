use crate::models::Product;

/// The demonstration catalog loaded at process start (ids 1-3).
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "无线鼠标".to_string(),
            description: "静音按键，支持蓝牙与2.4G".to_string(),
            price: 89.00,
            stock: 120,
        },
        Product {
            id: 2,
            name: "机械键盘".to_string(),
            description: "87键红轴，支持热插拔".to_string(),
            price: 299.00,
            stock: 60,
        },
        Product {
            id: 3,
            name: "27英寸显示器".to_string(),
            description: "2K分辨率，75Hz刷新率".to_string(),
            price: 1199.00,
            stock: 25,
        },
    ]
}

use crate::models::PaymentMethod;

pub(super) struct ProductFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub stock: i64,
}

pub(super) struct UserFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub active: bool,
}

pub(super) struct PaymentFixture {
    pub id: &'static str,
    pub amount: f64,
    pub method: PaymentMethod,
    pub reference: &'static str,
    pub days_ago: i64,
}

pub(super) const PRODUCTS: [ProductFixture; 5] = [
    ProductFixture { id: "p1", name: "Wireless Mouse", category: "Accessories", price: 29.99, stock: 42 },
    ProductFixture { id: "p2", name: "Mechanical Keyboard", category: "Accessories", price: 89.0, stock: 18 },
    ProductFixture { id: "p3", name: "USB-C Charger 65W", category: "Power", price: 39.5, stock: 60 },
    ProductFixture { id: "p4", name: "27\" 4K Monitor", category: "Displays", price: 329.0, stock: 8 },
    ProductFixture { id: "p5", name: "Thermal Receipt Rolls (10x)", category: "Supplies", price: 12.0, stock: 120 },
];

pub(super) const USERS: [UserFixture; 4] = [
    UserFixture { id: "u1", name: "Ava Carter", email: "ava@example.com", active: true },
    UserFixture { id: "u2", name: "Noah Singh", email: "noah@example.com", active: true },
    UserFixture { id: "u3", name: "Mia Chen", email: "mia@example.com", active: false },
    UserFixture { id: "u4", name: "Liam Patel", email: "liam@example.com", active: true },
];

pub(super) const PAYMENTS: [PaymentFixture; 3] = [
    PaymentFixture { id: "pay1", amount: 129.5, method: PaymentMethod::Card, reference: "#A12F4", days_ago: 0 },
    PaymentFixture { id: "pay2", amount: 29.99, method: PaymentMethod::Cash, reference: "#A12F5", days_ago: 1 },
    PaymentFixture { id: "pay3", amount: 59.0, method: PaymentMethod::Mobile, reference: "#A12F6", days_ago: 2 },
];

//! Standard O-ring sizes: inside diameter, outside diameter, cross-section. Inches.

use crate::domain::RingItem;

pub static RING: &[RingItem] = &[
    RingItem::new(1.7500, 2.0000, 0.1250),
    RingItem::new(0.5625, 0.7500, 0.0938),
    RingItem::new(2.2500, 2.6250, 0.1875),
    RingItem::new(2.3750, 2.7500, 0.1875),
    RingItem::new(3.1250, 3.5000, 0.1875),
    RingItem::new(3.6250, 3.8750, 0.1250),
    RingItem::new(0.6250, 0.8125, 0.0938),
    RingItem::new(3.7500, 4.0000, 0.1250),
    RingItem::new(3.8750, 4.1250, 0.1250),
    RingItem::new(5.6250, 5.8750, 0.1250),
    RingItem::new(0.6875, 0.8750, 0.0938),
    RingItem::new(0.7500, 0.9375, 0.0938),
    RingItem::new(0.7500, 1.0000, 0.1250),
    RingItem::new(0.8750, 1.0625, 0.0938),
    RingItem::new(0.9375, 1.1875, 0.1250),
    RingItem::new(0.3125, 0.5625, 0.1250),
    RingItem::new(0.5625, 0.6875, 0.0625),
    RingItem::new(0.1875, 0.3125, 0.0625),
    RingItem::new(0.6250, 0.7500, 0.0625),
    RingItem::new(1.6250, 2.0000, 0.1875),
    RingItem::new(0.2188, 0.3438, 0.0625),
    RingItem::new(0.2500, 0.3750, 0.0625),
    RingItem::new(0.0002, 0.4375, 0.2187),
    RingItem::new(0.1250, 0.2500, 0.0625),
    RingItem::new(0.6875, 0.8125, 0.0625),
    RingItem::new(0.3750, 0.5000, 0.0625),
    RingItem::new(0.2500, 0.4375, 0.0938),
    RingItem::new(0.3750, 0.5625, 0.0938),
    RingItem::new(0.3125, 0.5000, 0.0938),
    RingItem::new(0.4375, 0.6250, 0.0938),
    RingItem::new(0.5000, 1.0625, 0.5625),
];

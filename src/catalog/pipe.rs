//! Standard pipe and tube sizes: inside diameter, outside diameter, wall. Inches.
//!
//! Walls are the tabulated values and may differ slightly from `(od - id) / 2`.

use crate::domain::StockItem;

#[rustfmt::skip]
pub static PIPE: &[StockItem] = &[
    StockItem::new( 0.489,  0.625, 0.068),
    StockItem::new( 0.715,  0.875, 0.080),
    StockItem::new( 0.921,  1.125, 0.102),
    StockItem::new( 0.622,  0.840, 0.109),
    StockItem::new( 0.824,  1.050, 0.113),
    StockItem::new( 1.049,  1.315, 0.133),
    StockItem::new( 0.742,  1.050, 0.154),
    StockItem::new( 0.957,  1.315, 0.179),
    StockItem::new( 0.957,  1.315, 0.179),
    StockItem::new( 1.278,  1.660, 0.191),
    StockItem::new( 1.278,  1.660, 0.191),
    StockItem::new( 1.363,  1.660, 0.140),
    StockItem::new( 1.532,  1.660, 0.064),
    StockItem::new( 0.930,  1.050, 0.060),
    StockItem::new( 1.189,  1.315, 0.063),
    StockItem::new( 1.033,  1.315, 0.133),
    StockItem::new( 0.609,  0.840, 0.109),
    StockItem::new( 0.810,  1.050, 0.113),
    StockItem::new( 0.716,  0.840, 0.062),
    StockItem::new( 0.609,  0.840, 0.109),
    StockItem::new( 1.033,  1.315, 0.133),
    StockItem::new( 1.380,  1.660, 0.140),
    StockItem::new( 1.610,  1.900, 0.145),
    StockItem::new( 2.067,  2.375, 0.154),
    StockItem::new( 3.068,  3.500, 0.216),
    StockItem::new( 4.026,  4.500, 0.237),
    StockItem::new( 6.065,  6.625, 0.280),
    StockItem::new( 0.302,  0.540, 0.119),
    StockItem::new( 0.423,  0.675, 0.126),
    StockItem::new( 0.546,  0.840, 0.147),
    StockItem::new( 1.500,  1.900, 0.200),
    StockItem::new( 1.939,  2.375, 0.218),
    StockItem::new( 2.323,  2.875, 0.276),
    StockItem::new( 2.900,  3.500, 0.300),
    StockItem::new( 3.826,  4.500, 0.337),
    StockItem::new( 4.813,  5.563, 0.375),
    StockItem::new( 5.761,  6.625, 0.432),
    StockItem::new( 7.625,  8.625, 0.500),
    StockItem::new( 9.564, 10.750, 0.593),
    StockItem::new(11.376, 12.750, 0.687),
    StockItem::new(12.500, 14.000, 0.750),
    StockItem::new(14.314, 16.000, 0.843),
    StockItem::new( 5.047,  5.563, 0.258),
    StockItem::new( 7.981,  8.625, 0.322),
    StockItem::new(10.020, 10.750, 0.365),
    StockItem::new(11.938, 12.750, 0.406),
    StockItem::new(13.126, 14.000, 0.437),
    StockItem::new(15.000, 16.000, 0.500),
    StockItem::new( 3.000,  3.250, 0.125),
];

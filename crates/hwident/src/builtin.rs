//! The built-in identifier table.
//!
//! Apple's published model identifiers, grouped by family and in release
//! order within each family. Extend by adding rows; keys must stay unique.

use crate::table::DeviceFamily::{self, *};

pub(crate) static ENTRIES: &[(&str, &str, DeviceFamily)] = &[
    // iPhone
    ("iPhone1,1", "iPhone", IPhone),
    ("iPhone1,2", "iPhone 3G", IPhone),
    ("iPhone2,1", "iPhone 3GS", IPhone),
    ("iPhone3,1", "iPhone 4 (GSM)", IPhone),
    ("iPhone3,2", "iPhone 4 (GSM Rev A)", IPhone),
    ("iPhone3,3", "iPhone 4 (CDMA)", IPhone),
    ("iPhone4,1", "iPhone 4S", IPhone),
    ("iPhone5,1", "iPhone 5 (GSM)", IPhone),
    ("iPhone5,2", "iPhone 5 (Global)", IPhone),
    ("iPhone5,3", "iPhone 5c (GSM)", IPhone),
    ("iPhone5,4", "iPhone 5c (Global)", IPhone),
    ("iPhone6,1", "iPhone 5s (GSM)", IPhone),
    ("iPhone6,2", "iPhone 5s (Global)", IPhone),
    ("iPhone7,2", "iPhone 6", IPhone),
    ("iPhone7,1", "iPhone 6 Plus", IPhone),
    ("iPhone8,1", "iPhone 6s", IPhone),
    ("iPhone8,2", "iPhone 6s Plus", IPhone),
    ("iPhone8,4", "iPhone SE", IPhone),
    ("iPhone9,1", "iPhone 7", IPhone),
    ("iPhone9,3", "iPhone 7", IPhone),
    ("iPhone9,2", "iPhone 7 Plus", IPhone),
    ("iPhone9,4", "iPhone 7 Plus", IPhone),
    ("iPhone10,1", "iPhone 8", IPhone),
    ("iPhone10,4", "iPhone 8", IPhone),
    ("iPhone10,2", "iPhone 8 Plus", IPhone),
    ("iPhone10,5", "iPhone 8 Plus", IPhone),
    ("iPhone10,3", "iPhone X", IPhone),
    ("iPhone10,6", "iPhone X", IPhone),
    ("iPhone11,2", "iPhone XS", IPhone),
    ("iPhone11,4", "iPhone XS Max", IPhone),
    ("iPhone11,6", "iPhone XS Max", IPhone),
    ("iPhone11,8", "iPhone XR", IPhone),
    ("iPhone12,1", "iPhone 11", IPhone),
    ("iPhone12,3", "iPhone 11 Pro", IPhone),
    ("iPhone12,5", "iPhone 11 Pro Max", IPhone),
    ("iPhone12,8", "iPhone SE (2nd generation)", IPhone),
    ("iPhone13,1", "iPhone 12 mini", IPhone),
    ("iPhone13,2", "iPhone 12", IPhone),
    ("iPhone13,3", "iPhone 12 Pro", IPhone),
    ("iPhone13,4", "iPhone 12 Pro Max", IPhone),
    ("iPhone14,4", "iPhone 13 mini", IPhone),
    ("iPhone14,5", "iPhone 13", IPhone),
    ("iPhone14,2", "iPhone 13 Pro", IPhone),
    ("iPhone14,3", "iPhone 13 Pro Max", IPhone),
    ("iPhone14,6", "iPhone SE (3rd generation)", IPhone),
    ("iPhone14,7", "iPhone 14", IPhone),
    ("iPhone14,8", "iPhone 14 Plus", IPhone),
    ("iPhone15,2", "iPhone 14 Pro", IPhone),
    ("iPhone15,3", "iPhone 14 Pro Max", IPhone),
    ("iPhone15,4", "iPhone 15", IPhone),
    ("iPhone15,5", "iPhone 15 Plus", IPhone),
    ("iPhone16,1", "iPhone 15 Pro", IPhone),
    ("iPhone16,2", "iPhone 15 Pro Max", IPhone),
    ("iPhone17,3", "iPhone 16", IPhone),
    ("iPhone17,4", "iPhone 16 Plus", IPhone),
    ("iPhone17,1", "iPhone 16 Pro", IPhone),
    ("iPhone17,2", "iPhone 16 Pro Max", IPhone),
    ("iPhone17,5", "iPhone 16e", IPhone),
    // iPod touch
    ("iPod1,1", "iPod touch", IPod),
    ("iPod2,1", "iPod touch (2nd generation)", IPod),
    ("iPod3,1", "iPod touch (3rd generation)", IPod),
    ("iPod4,1", "iPod touch (4th generation)", IPod),
    ("iPod5,1", "iPod touch (5th generation)", IPod),
    ("iPod7,1", "iPod touch (6th generation)", IPod),
    ("iPod9,1", "iPod touch (7th generation)", IPod),
    // iPad
    ("iPad1,1", "iPad", IPad),
    ("iPad2,1", "iPad 2 (Wi-Fi)", IPad),
    ("iPad2,2", "iPad 2 (GSM)", IPad),
    ("iPad2,3", "iPad 2 (CDMA)", IPad),
    ("iPad2,4", "iPad 2 (Wi-Fi, Rev A)", IPad),
    ("iPad3,1", "iPad (3rd generation) (Wi-Fi)", IPad),
    ("iPad3,2", "iPad (3rd generation) (CDMA)", IPad),
    ("iPad3,3", "iPad (3rd generation) (GSM)", IPad),
    ("iPad3,4", "iPad (4th generation) (Wi-Fi)", IPad),
    ("iPad3,5", "iPad (4th generation) (GSM)", IPad),
    ("iPad3,6", "iPad (4th generation) (Global)", IPad),
    ("iPad6,11", "iPad (5th generation) (Wi-Fi)", IPad),
    ("iPad6,12", "iPad (5th generation) (Cellular)", IPad),
    ("iPad7,5", "iPad (6th generation) (Wi-Fi)", IPad),
    ("iPad7,6", "iPad (6th generation) (Cellular)", IPad),
    ("iPad7,11", "iPad (7th generation) (Wi-Fi)", IPad),
    ("iPad7,12", "iPad (7th generation) (Cellular)", IPad),
    ("iPad11,6", "iPad (8th generation) (Wi-Fi)", IPad),
    ("iPad11,7", "iPad (8th generation) (Cellular)", IPad),
    ("iPad12,1", "iPad (9th generation) (Wi-Fi)", IPad),
    ("iPad12,2", "iPad (9th generation) (Cellular)", IPad),
    ("iPad13,18", "iPad (10th generation) (Wi-Fi)", IPad),
    ("iPad13,19", "iPad (10th generation) (Cellular)", IPad),
    // iPad mini
    ("iPad2,5", "iPad mini (Wi-Fi)", IPad),
    ("iPad2,6", "iPad mini (GSM)", IPad),
    ("iPad2,7", "iPad mini (Global)", IPad),
    ("iPad4,4", "iPad mini 2 (Wi-Fi)", IPad),
    ("iPad4,5", "iPad mini 2 (Cellular)", IPad),
    ("iPad4,6", "iPad mini 2 (China)", IPad),
    ("iPad4,7", "iPad mini 3 (Wi-Fi)", IPad),
    ("iPad4,8", "iPad mini 3 (Cellular)", IPad),
    ("iPad4,9", "iPad mini 3 (China)", IPad),
    ("iPad5,1", "iPad mini 4 (Wi-Fi)", IPad),
    ("iPad5,2", "iPad mini 4 (Cellular)", IPad),
    ("iPad11,1", "iPad mini (5th generation) (Wi-Fi)", IPad),
    ("iPad11,2", "iPad mini (5th generation) (Cellular)", IPad),
    ("iPad14,1", "iPad mini (6th generation) (Wi-Fi)", IPad),
    ("iPad14,2", "iPad mini (6th generation) (Cellular)", IPad),
    ("iPad16,1", "iPad mini (A17 Pro) (Wi-Fi)", IPad),
    ("iPad16,2", "iPad mini (A17 Pro) (Cellular)", IPad),
    // iPad Air
    ("iPad4,1", "iPad Air (Wi-Fi)", IPad),
    ("iPad4,2", "iPad Air (Cellular)", IPad),
    ("iPad4,3", "iPad Air (China)", IPad),
    ("iPad5,3", "iPad Air 2 (Wi-Fi)", IPad),
    ("iPad5,4", "iPad Air 2 (Cellular)", IPad),
    ("iPad11,3", "iPad Air (3rd generation) (Wi-Fi)", IPad),
    ("iPad11,4", "iPad Air (3rd generation) (Cellular)", IPad),
    ("iPad13,1", "iPad Air (4th generation) (Wi-Fi)", IPad),
    ("iPad13,2", "iPad Air (4th generation) (Cellular)", IPad),
    ("iPad13,16", "iPad Air (5th generation) (Wi-Fi)", IPad),
    ("iPad13,17", "iPad Air (5th generation) (Cellular)", IPad),
    ("iPad14,8", "iPad Air 11-inch (M2) (Wi-Fi)", IPad),
    ("iPad14,9", "iPad Air 11-inch (M2) (Cellular)", IPad),
    ("iPad14,10", "iPad Air 13-inch (M2) (Wi-Fi)", IPad),
    ("iPad14,11", "iPad Air 13-inch (M2) (Cellular)", IPad),
    // iPad Pro
    ("iPad6,3", "iPad Pro (9.7-inch) (Wi-Fi)", IPad),
    ("iPad6,4", "iPad Pro (9.7-inch) (Cellular)", IPad),
    ("iPad6,7", "iPad Pro (12.9-inch) (Wi-Fi)", IPad),
    ("iPad6,8", "iPad Pro (12.9-inch) (Cellular)", IPad),
    ("iPad7,1", "iPad Pro (12.9-inch) (2nd generation) (Wi-Fi)", IPad),
    ("iPad7,2", "iPad Pro (12.9-inch) (2nd generation) (Cellular)", IPad),
    ("iPad7,3", "iPad Pro (10.5-inch) (Wi-Fi)", IPad),
    ("iPad7,4", "iPad Pro (10.5-inch) (Cellular)", IPad),
    ("iPad8,1", "iPad Pro (11-inch) (Wi-Fi)", IPad),
    ("iPad8,2", "iPad Pro (11-inch) (1TB, Wi-Fi)", IPad),
    ("iPad8,3", "iPad Pro (11-inch) (Cellular)", IPad),
    ("iPad8,4", "iPad Pro (11-inch) (1TB, Cellular)", IPad),
    ("iPad8,5", "iPad Pro (12.9-inch) (3rd generation) (Wi-Fi)", IPad),
    ("iPad8,6", "iPad Pro (12.9-inch) (3rd generation) (1TB, Wi-Fi)", IPad),
    ("iPad8,7", "iPad Pro (12.9-inch) (3rd generation) (Cellular)", IPad),
    ("iPad8,8", "iPad Pro (12.9-inch) (3rd generation) (1TB, Cellular)", IPad),
    ("iPad8,9", "iPad Pro (11-inch) (2nd generation) (Wi-Fi)", IPad),
    ("iPad8,10", "iPad Pro (11-inch) (2nd generation) (Cellular)", IPad),
    ("iPad8,11", "iPad Pro (12.9-inch) (4th generation) (Wi-Fi)", IPad),
    ("iPad8,12", "iPad Pro (12.9-inch) (4th generation) (Cellular)", IPad),
    ("iPad13,4", "iPad Pro (11-inch) (3rd generation) (Wi-Fi)", IPad),
    ("iPad13,5", "iPad Pro (11-inch) (3rd generation) (Wi-Fi)", IPad),
    ("iPad13,6", "iPad Pro (11-inch) (3rd generation) (Cellular)", IPad),
    ("iPad13,7", "iPad Pro (11-inch) (3rd generation) (Cellular)", IPad),
    ("iPad13,8", "iPad Pro (12.9-inch) (5th generation) (Wi-Fi)", IPad),
    ("iPad13,9", "iPad Pro (12.9-inch) (5th generation) (Wi-Fi)", IPad),
    ("iPad13,10", "iPad Pro (12.9-inch) (5th generation) (Cellular)", IPad),
    ("iPad13,11", "iPad Pro (12.9-inch) (5th generation) (Cellular)", IPad),
    ("iPad14,3", "iPad Pro (11-inch) (4th generation) (Wi-Fi)", IPad),
    ("iPad14,4", "iPad Pro (11-inch) (4th generation) (Cellular)", IPad),
    ("iPad14,5", "iPad Pro (12.9-inch) (6th generation) (Wi-Fi)", IPad),
    ("iPad14,6", "iPad Pro (12.9-inch) (6th generation) (Cellular)", IPad),
    ("iPad16,3", "iPad Pro 11-inch (M4) (Wi-Fi)", IPad),
    ("iPad16,4", "iPad Pro 11-inch (M4) (Cellular)", IPad),
    ("iPad16,5", "iPad Pro 13-inch (M4) (Wi-Fi)", IPad),
    ("iPad16,6", "iPad Pro 13-inch (M4) (Cellular)", IPad),
    // Apple Watch
    ("Watch1,1", "Apple Watch (38mm)", Watch),
    ("Watch1,2", "Apple Watch (42mm)", Watch),
    ("Watch2,6", "Apple Watch Series 1 (38mm)", Watch),
    ("Watch2,7", "Apple Watch Series 1 (42mm)", Watch),
    ("Watch2,3", "Apple Watch Series 2 (38mm)", Watch),
    ("Watch2,4", "Apple Watch Series 2 (42mm)", Watch),
    ("Watch3,1", "Apple Watch Series 3 (38mm, GPS + Cellular)", Watch),
    ("Watch3,2", "Apple Watch Series 3 (42mm, GPS + Cellular)", Watch),
    ("Watch3,3", "Apple Watch Series 3 (38mm, GPS)", Watch),
    ("Watch3,4", "Apple Watch Series 3 (42mm, GPS)", Watch),
    ("Watch4,1", "Apple Watch Series 4 (40mm, GPS)", Watch),
    ("Watch4,2", "Apple Watch Series 4 (44mm, GPS)", Watch),
    ("Watch4,3", "Apple Watch Series 4 (40mm, GPS + Cellular)", Watch),
    ("Watch4,4", "Apple Watch Series 4 (44mm, GPS + Cellular)", Watch),
    ("Watch5,1", "Apple Watch Series 5 (40mm, GPS)", Watch),
    ("Watch5,2", "Apple Watch Series 5 (44mm, GPS)", Watch),
    ("Watch5,3", "Apple Watch Series 5 (40mm, GPS + Cellular)", Watch),
    ("Watch5,4", "Apple Watch Series 5 (44mm, GPS + Cellular)", Watch),
    ("Watch5,9", "Apple Watch SE (40mm, GPS)", Watch),
    ("Watch5,10", "Apple Watch SE (44mm, GPS)", Watch),
    ("Watch5,11", "Apple Watch SE (40mm, GPS + Cellular)", Watch),
    ("Watch5,12", "Apple Watch SE (44mm, GPS + Cellular)", Watch),
    ("Watch6,1", "Apple Watch Series 6 (40mm, GPS)", Watch),
    ("Watch6,2", "Apple Watch Series 6 (44mm, GPS)", Watch),
    ("Watch6,3", "Apple Watch Series 6 (40mm, GPS + Cellular)", Watch),
    ("Watch6,4", "Apple Watch Series 6 (44mm, GPS + Cellular)", Watch),
    ("Watch6,6", "Apple Watch Series 7 (41mm, GPS)", Watch),
    ("Watch6,7", "Apple Watch Series 7 (45mm, GPS)", Watch),
    ("Watch6,8", "Apple Watch Series 7 (41mm, GPS + Cellular)", Watch),
    ("Watch6,9", "Apple Watch Series 7 (45mm, GPS + Cellular)", Watch),
    ("Watch6,10", "Apple Watch SE (2nd generation) (40mm, GPS)", Watch),
    ("Watch6,11", "Apple Watch SE (2nd generation) (44mm, GPS)", Watch),
    ("Watch6,12", "Apple Watch SE (2nd generation) (40mm, GPS + Cellular)", Watch),
    ("Watch6,13", "Apple Watch SE (2nd generation) (44mm, GPS + Cellular)", Watch),
    ("Watch6,14", "Apple Watch Series 8 (41mm, GPS)", Watch),
    ("Watch6,15", "Apple Watch Series 8 (45mm, GPS)", Watch),
    ("Watch6,16", "Apple Watch Series 8 (41mm, GPS + Cellular)", Watch),
    ("Watch6,17", "Apple Watch Series 8 (45mm, GPS + Cellular)", Watch),
    ("Watch6,18", "Apple Watch Ultra", Watch),
    ("Watch7,1", "Apple Watch Series 9 (41mm, GPS)", Watch),
    ("Watch7,2", "Apple Watch Series 9 (45mm, GPS)", Watch),
    ("Watch7,3", "Apple Watch Series 9 (41mm, GPS + Cellular)", Watch),
    ("Watch7,4", "Apple Watch Series 9 (45mm, GPS + Cellular)", Watch),
    ("Watch7,5", "Apple Watch Ultra 2", Watch),
    // Apple TV
    ("AppleTV2,1", "Apple TV (2nd generation)", AppleTv),
    ("AppleTV3,1", "Apple TV (3rd generation)", AppleTv),
    ("AppleTV3,2", "Apple TV (3rd generation, Rev A)", AppleTv),
    ("AppleTV5,3", "Apple TV HD", AppleTv),
    ("AppleTV6,2", "Apple TV 4K", AppleTv),
    ("AppleTV11,1", "Apple TV 4K (2nd generation)", AppleTv),
    ("AppleTV14,1", "Apple TV 4K (3rd generation)", AppleTv),
    // HomePod
    ("AudioAccessory1,1", "HomePod", HomePod),
    ("AudioAccessory1,2", "HomePod", HomePod),
    ("AudioAccessory5,1", "HomePod mini", HomePod),
    ("AudioAccessory6,1", "HomePod (2nd generation)", HomePod),
    // Mac, as reported by hw.model
    ("MacBookAir10,1", "MacBook Air (M1, 2020)", Mac),
    ("MacBookPro17,1", "MacBook Pro (13-inch, M1, 2020)", Mac),
    ("MacBookPro18,1", "MacBook Pro (16-inch, 2021)", Mac),
    ("MacBookPro18,2", "MacBook Pro (16-inch, 2021)", Mac),
    ("MacBookPro18,3", "MacBook Pro (14-inch, 2021)", Mac),
    ("MacBookPro18,4", "MacBook Pro (14-inch, 2021)", Mac),
    ("Macmini9,1", "Mac mini (M1, 2020)", Mac),
    ("iMac21,1", "iMac (24-inch, M1, 2021)", Mac),
    ("iMac21,2", "iMac (24-inch, M1, 2021)", Mac),
    ("Mac13,1", "Mac Studio (2022)", Mac),
    ("Mac13,2", "Mac Studio (2022)", Mac),
    ("Mac14,2", "MacBook Air (M2, 2022)", Mac),
    ("Mac14,7", "MacBook Pro (13-inch, M2, 2022)", Mac),
    ("Mac14,3", "Mac mini (2023)", Mac),
    ("Mac14,12", "Mac mini (2023)", Mac),
    ("Mac14,5", "MacBook Pro (14-inch, 2023)", Mac),
    ("Mac14,9", "MacBook Pro (14-inch, 2023)", Mac),
    ("Mac14,6", "MacBook Pro (16-inch, 2023)", Mac),
    ("Mac14,10", "MacBook Pro (16-inch, 2023)", Mac),
    ("Mac14,15", "MacBook Air (15-inch, M2, 2023)", Mac),
    ("Mac14,13", "Mac Studio (2023)", Mac),
    ("Mac14,14", "Mac Studio (2023)", Mac),
    ("Mac14,8", "Mac Pro (2023)", Mac),
    // Simulators report the host architecture
    ("i386", "Simulator", Simulator),
    ("x86_64", "Simulator", Simulator),
    ("arm64", "Simulator", Simulator),
];

//! Display strings for the three supported languages.
//!
//! Each locale is a fixed-size table indexed by `TextKey`, so a locale
//! missing a key does not compile.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("language {0} not supported")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    ZhCn,
    ZhTw,
    #[default]
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::ZhCn, Locale::ZhTw, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }

    /// Position in `ALL`; reported to the host page.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: &str) -> Result<Self, LocaleError> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }

    pub fn text(self, key: TextKey) -> &'static str {
        let table = match self {
            Locale::ZhCn => &ZH_CN,
            Locale::ZhTw => &ZH_TW,
            Locale::En => &EN,
        };
        table[key as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    LoadingText,
    ViewSolarSystem,
    ViewPlanetDetail,
    SpeedLabel,
    ZoomLabel,
    BackButton,
    PropOfficialName,
    PropType,
    PropTemp,
    PropMass,
    PropOrbitSun,
    PropOrbitPlanet,
    UnitAu,
    UnitPlanetRadius,
    FactLabel,
    ClickToZoom,
    DetailBaseProps,
    DetailOrbit,
    DetailParams,
    DetailFact,
    DetailDiameter,
    DetailGravity,
    DetailDayLength,
    DetailMoons,
    DetailNoMoons,
    DetailReturnPrompt,
    InfoSystemPrompt,
    Unknown,
    NotAvailable,
    NoFact,
}

impl TextKey {
    pub const COUNT: usize = TextKey::NoFact as usize + 1;
}

type Table = [&'static str; TextKey::COUNT];

const ZH_CN: Table = [
    "资源加载中...",
    "太阳系总览模式",
    "卫星系统视图",
    "☄ 速度:",
    "☌ 缩放:",
    "⏎ 返回太阳系总览",
    "🌎 官方名称",
    "🌑 类型",
    "🌡️ 表面温度",
    "⚖️ 质量",
    "轨道半径 (相对太阳)",
    "公转轨道 (相对主星)",
    "AU",
    "倍行星半径",
    "💡 科学趣闻",
    "** 点击进入细节视图 **",
    "🛰️ 基本属性",
    "🔭 轨道与周期",
    "✨ 详细参数",
    "💡 科学趣闻",
    "直径 (赤道)",
    "重力加速度",
    "自转周期 (天)",
    "已知卫星数量",
    "该行星没有已知的卫星",
    "请点击返回太阳系总览",
    "[ 信息系统提示 ]",
    "未知",
    "N/A",
    "无特殊信息",
];

const ZH_TW: Table = [
    "資源加載中...",
    "太陽系總覽模式",
    "衛星系統視圖",
    "☄ 速度:",
    "☌ 縮放:",
    "⏎ 返回太陽系總覽",
    "🌎 官方名稱",
    "🌑 類型",
    "🌡️ 表面溫度",
    "⚖️ 質量",
    "軌道半徑 (相對太陽)",
    "公轉軌道 (相對主星)",
    "AU",
    "倍行星半徑",
    "💡 科學趣聞",
    "** 點擊進入細節視圖 **",
    "🛰️ 基本屬性",
    "🔭 軌道與週期",
    "✨ 詳細參數",
    "💡 科學趣聞",
    "直徑 (赤道)",
    "重力加速度",
    "自轉週期 (天)",
    "已知衛星數量",
    "該行星沒有已知的衛星",
    "請點擊返回太陽系總覽",
    "[ 訊息系統提示 ]",
    "未知",
    "N/A",
    "無特殊資訊",
];

const EN: Table = [
    "Loading Assets...",
    "Solar System Overview",
    "Satellite System View",
    "☄ Speed:",
    "☌ Zoom:",
    "⏎ Back to Overview",
    "🌎 Official Name",
    "🌑 Type",
    "🌡️ Surface Temp",
    "⚖️ Mass",
    "Orbital Distance (vs Sun)",
    "Orbital Distance (vs Host)",
    "AU",
    "x Planet Radius",
    "💡 Fun Fact",
    "** Click to enter detail view **",
    "🛰️ Basic Properties",
    "🔭 Orbit & Period",
    "✨ Detailed Parameters",
    "💡 Scientific Facts",
    "Diameter (Equatorial)",
    "Gravity Acceleration",
    "Day Length (Earth Days)",
    "Known Moons Count",
    "This planet has no known moons.",
    "Click to return to the Solar System Overview",
    "[ Information System Prompt ]",
    "Unknown",
    "N/A",
    "No special information",
];

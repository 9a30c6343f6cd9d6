//! Script globals read by `ConfigStore::load`, with defaults and the
//! load policy for each slot.

use crate::{BooleanKey, FloatKey, IntegerKey, StringKey};

/// When a binding is applied during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LoadPolicy {
    /// Refreshed on every load and reload.
    EveryLoad,
    /// Only applied by the first successful load; reloads keep the value.
    FirstLoad,
    /// First load only, and only while the slot still holds its zero
    /// value, so an earlier assignment (command line) wins.
    FirstLoadIfUnset,
}

impl LoadPolicy {
    pub(super) fn applies(self, first_load: bool, unset: bool) -> bool {
        match self {
            LoadPolicy::EveryLoad => true,
            LoadPolicy::FirstLoad => first_load,
            LoadPolicy::FirstLoadIfUnset => first_load && unset,
        }
    }
}

/// One slot fed from one script global.
#[derive(Debug, Clone, Copy)]
pub(super) struct Binding<K, D> {
    pub key: K,
    pub global: &'static str,
    pub default: D,
    pub policy: LoadPolicy,
}

const fn every<K, D>(key: K, global: &'static str, default: D) -> Binding<K, D> {
    Binding {
        key,
        global,
        default,
        policy: LoadPolicy::EveryLoad,
    }
}

const fn once<K, D>(key: K, global: &'static str, default: D) -> Binding<K, D> {
    Binding {
        key,
        global,
        default,
        policy: LoadPolicy::FirstLoad,
    }
}

const fn once_if_unset<K, D>(key: K, global: &'static str, default: D) -> Binding<K, D> {
    Binding {
        key,
        global,
        default,
        policy: LoadPolicy::FirstLoadIfUnset,
    }
}

pub(super) const STRINGS: &[Binding<StringKey, &str>] = &[
    once_if_unset(StringKey::Ip, "ip", "127.0.0.1"),
    once(StringKey::MapName, "mapName", "forgotten"),
    once(StringKey::MapAuthor, "mapAuthor", "Unknown"),
    once(StringKey::HouseRentPeriod, "houseRentPeriod", "never"),
    once(StringKey::MysqlHost, "mysqlHost", "127.0.0.1"),
    once(StringKey::MysqlUser, "mysqlUser", "forgottenserver"),
    once(StringKey::MysqlPass, "mysqlPass", ""),
    once(StringKey::MysqlDb, "mysqlDatabase", "forgottenserver"),
    once(StringKey::MysqlSock, "mysqlSock", ""),
    every(StringKey::AccountManagerAuth, "accountManagerPassword", "1"),
    every(StringKey::DefaultPriority, "defaultPriority", "high"),
    every(StringKey::ServerName, "serverName", ""),
    every(StringKey::OwnerName, "ownerName", ""),
    every(StringKey::OwnerEmail, "ownerEmail", ""),
    every(StringKey::Url, "url", ""),
    every(StringKey::Location, "location", ""),
    every(StringKey::Motd, "motd", ""),
    every(StringKey::WorldType, "worldType", "pvp"),
];

pub(super) const INTEGERS: &[Binding<IntegerKey, i32>] = &[
    once(IntegerKey::SqlPort, "mysqlPort", 3306),
    once_if_unset(IntegerKey::GamePort, "gameProtocolPort", 7172),
    once_if_unset(IntegerKey::LoginPort, "loginProtocolPort", 7171),
    once(IntegerKey::StatusPort, "statusProtocolPort", 7171),
    once(
        IntegerKey::MarketOfferDuration,
        "marketOfferDuration",
        30 * 24 * 60 * 60,
    ),
    every(IntegerKey::AccountManagerPosX, "managerPositionX", 0),
    every(IntegerKey::AccountManagerPosY, "managerPositionY", 0),
    every(IntegerKey::AccountManagerPosZ, "managerPositionZ", 0),
    every(IntegerKey::MaxPlayers, "maxPlayers", 0),
    every(IntegerKey::PzLocked, "pzLocked", 60000),
    every(IntegerKey::DefaultDespawnRange, "deSpawnRange", 2),
    every(IntegerKey::DefaultDespawnRadius, "deSpawnRadius", 50),
    every(IntegerKey::DefaultWalkToSpawnRadius, "walkToSpawnRadius", 15),
    every(IntegerKey::RateExperience, "rateExp", 5),
    every(IntegerKey::RateSkill, "rateSkill", 3),
    every(IntegerKey::RateLoot, "rateLoot", 2),
    every(IntegerKey::RateMagic, "rateMagic", 3),
    every(IntegerKey::RateSpawn, "rateSpawn", 1),
    every(IntegerKey::HousePrice, "housePriceEachSQM", 1000),
    every(IntegerKey::KillsToRed, "killsToRedSkull", 3),
    every(IntegerKey::KillsToBlack, "killsToBlackSkull", 6),
    every(IntegerKey::ActionsDelayInterval, "timeBetweenActions", 200),
    every(IntegerKey::ExActionsDelayInterval, "timeBetweenExActions", 1000),
    every(IntegerKey::MaxMessageBuffer, "maxMessageBuffer", 4),
    every(IntegerKey::KickAfterMinutes, "kickIdlePlayerAfterMinutes", 15),
    every(IntegerKey::ProtectionLevel, "protectionLevel", 1),
    every(IntegerKey::DeathLosePercent, "deathLosePercent", -1),
    every(IntegerKey::StatusQueryTimeout, "statusTimeout", 5000),
    every(IntegerKey::FragTime, "timeToDecreaseFrags", 24 * 60 * 60),
    every(IntegerKey::WhiteSkullTime, "whiteSkullTime", 15 * 60),
    every(IntegerKey::StairhopDelay, "stairJumpExhaustion", 2000),
    every(
        IntegerKey::ExpFromPlayersLevelRange,
        "expFromPlayersLevelRange",
        75,
    ),
    every(
        IntegerKey::CheckExpiredMarketOffersEachMinutes,
        "checkExpiredMarketOffersEachMinutes",
        60,
    ),
    every(
        IntegerKey::MaxMarketOffersAtATimePerPlayer,
        "maxMarketOffersAtATimePerPlayer",
        100,
    ),
    every(IntegerKey::MaxPacketsPerSecond, "maxPacketsPerSecond", 25),
    every(
        IntegerKey::ServerSaveNotifyDuration,
        "serverSaveNotifyDuration",
        5,
    ),
    every(IntegerKey::YellMinimumLevel, "yellMinimumLevel", 2),
    every(
        IntegerKey::MinimumLevelToSendPrivate,
        "minimumLevelToSendPrivate",
        1,
    ),
    every(IntegerKey::VipFreeLimit, "vipFreeLimit", 20),
    every(IntegerKey::VipPremiumLimit, "vipPremiumLimit", 100),
    every(IntegerKey::DepotFreeLimit, "depotFreeLimit", 2000),
    every(IntegerKey::DepotPremiumLimit, "depotPremiumLimit", 10000),
];

pub(super) const BOOLEANS: &[Binding<BooleanKey, bool>] = &[
    once(BooleanKey::BindOnlyGlobalAddress, "bindOnlyGlobalAddress", false),
    once(BooleanKey::OptimizeDatabase, "startupDatabaseOptimization", true),
    every(BooleanKey::AllowChangeOutfit, "allowChangeOutfit", true),
    every(BooleanKey::OnePlayerOnAccount, "onePlayerOnlinePerAccount", true),
    every(BooleanKey::AimbotHotkeyEnabled, "hotkeyAimbotEnabled", true),
    every(BooleanKey::RemoveRuneCharges, "removeChargesFromRunes", true),
    every(BooleanKey::RemoveWeaponAmmo, "removeWeaponAmmunition", true),
    every(BooleanKey::RemoveWeaponCharges, "removeWeaponCharges", true),
    every(BooleanKey::RemovePotionCharges, "removeChargesFromPotions", true),
    every(
        BooleanKey::ExperienceFromPlayers,
        "experienceByKillingPlayers",
        false,
    ),
    every(BooleanKey::FreePremium, "freePremium", false),
    every(BooleanKey::ReplaceKickOnLogin, "replaceKickOnLogin", true),
    every(BooleanKey::AllowClones, "allowClones", false),
    every(BooleanKey::AllowWalkthrough, "allowWalkthrough", true),
    every(BooleanKey::MarketPremium, "premiumToCreateMarketOffer", true),
    every(BooleanKey::EmoteSpells, "emoteSpells", false),
    every(BooleanKey::StaminaSystem, "staminaSystem", true),
    every(BooleanKey::WarnUnsafeScripts, "warnUnsafeScripts", true),
    every(BooleanKey::ConvertUnsafeScripts, "convertUnsafeScripts", true),
    every(BooleanKey::ClassicEquipmentSlots, "classicEquipmentSlots", false),
    every(BooleanKey::ClassicAttackSpeed, "classicAttackSpeed", false),
    every(BooleanKey::ScriptsConsoleLogs, "showScriptsLogInConsole", true),
    every(
        BooleanKey::ServerSaveNotifyMessage,
        "serverSaveNotifyMessage",
        true,
    ),
    every(BooleanKey::ServerSaveCleanMap, "serverSaveCleanMap", false),
    every(BooleanKey::ServerSaveClose, "serverSaveClose", false),
    every(BooleanKey::ServerSaveShutdown, "serverSaveShutdown", true),
    every(
        BooleanKey::OnlineOfflineCharlist,
        "showOnlineStatusInCharlist",
        false,
    ),
    every(BooleanKey::YellAllowPremium, "yellAlwaysAllowPremium", false),
    every(BooleanKey::PremiumToSendPrivate, "premiumToSendPrivate", false),
    every(BooleanKey::ForceMonsterTypeLoad, "forceMonsterTypesOnLoad", true),
    every(BooleanKey::DefaultWorldLight, "defaultWorldLight", true),
    every(BooleanKey::HouseOwnedByAccount, "houseOwnedByAccount", false),
    every(BooleanKey::LuaItemDesc, "luaItemDesc", false),
    every(BooleanKey::CleanProtectionZones, "cleanProtectionZones", false),
    every(BooleanKey::HouseDoorShowPrice, "houseDoorShowPrice", true),
    every(
        BooleanKey::OnlyInvitedCanMoveHouseItems,
        "onlyInvitedCanMoveHouseItems",
        true,
    ),
    every(BooleanKey::RemoveOnDespawn, "removeOnDespawn", true),
    every(BooleanKey::PlayerConsoleLogs, "showPlayerLogInConsole", true),
    every(
        BooleanKey::CheckDuplicateStorageKeys,
        "checkDuplicateStorageKeys",
        false,
    ),
    every(BooleanKey::BedOfflineTraining, "bedOfflineTraining", true),
    every(BooleanKey::AugmentSlotProtection, "augmentSlotProtection", true),
    every(BooleanKey::AugmentStaminaRule, "augmentStaminInMinutes", false),
    every(
        BooleanKey::AugmentCriticalAnimation,
        "showAnimationOnCritHitFromAugment",
        true,
    ),
    every(BooleanKey::NpcPzWalkthrough, "allowNpcWalkthroughInPz", false),
    every(BooleanKey::EnableAccountManager, "useIngameAccountManager", true),
    every(BooleanKey::EnableNoPassLogin, "allowNoPassLogin", true),
];

pub(super) const FLOATS: &[Binding<FloatKey, f32>] = &[
    every(FloatKey::RewardBaseRate, "rewardBaseRate", 1.0),
    every(FloatKey::RewardRateDamageDone, "rewardRateDamageDone", 1.0),
    every(FloatKey::RewardRateDamageTaken, "rewardRateDamageTaken", 1.0),
    every(FloatKey::RewardRateHealingDone, "rewardRateHealingDone", 1.0),
];

//! End-to-end loading of a config script and stage file from disk.

use blacktek_config::{
    BooleanKey, ExperienceStage, FloatKey, IntegerKey, StageOrigin, StringKey,
};
use blacktek_test_utils::ConfigFixture;
use pretty_assertions::assert_eq;

const CONFIG_LUA: &str = r#"
-- Connection
ip = "203.0.113.7"
bindOnlyGlobalAddress = false
loginProtocolPort = 7171
gameProtocolPort = 7172
statusProtocolPort = 7171
maxPlayers = 0
motd = "Welcome to Black Tek!"
onePlayerOnlinePerAccount = true
allowClones = false
serverName = "Black Tek"
statusTimeout = 5 * 1000
replaceKickOnLogin = true
maxPacketsPerSecond = 25

-- Rates
rateExp = 5
rateSkill = 3
rateLoot = 2
rateMagic = 3
rateSpawn = 1

-- Monster despawn
deSpawnRange = 2
deSpawnRadius = 50

-- Stamina
staminaSystem = "false"

-- Rewards
rewardBaseRate = 1.0
rewardRateDamageDone = 1.5

-- MySQL
mysqlHost = "127.0.0.1"
mysqlUser = "forgottenserver"
mysqlPass = ""
mysqlDatabase = "forgottenserver"
mysqlPort = 3306
mysqlSock = ""

experienceStages = {
	{ minlevel = 1, maxlevel = 8, multiplier = 7 },
	{ minlevel = 9, maxlevel = 20, multiplier = 6 },
	{ minlevel = 21, maxlevel = 50, multiplier = 5 },
	{ minlevel = 51, maxlevel = 100, multiplier = 4 },
	{ minlevel = 101, multiplier = 3 }
}
"#;

#[test]
fn loads_server_config_script() {
    let fixture = ConfigFixture::new();
    fixture.write_script(CONFIG_LUA);
    let mut store = fixture.store();

    let report = store.load().expect("load");

    assert_eq!(store.string(StringKey::Ip), "203.0.113.7");
    assert_eq!(store.string(StringKey::ServerName), "Black Tek");
    assert_eq!(store.string(StringKey::Motd), "Welcome to Black Tek!");
    assert_eq!(store.number(IntegerKey::StatusQueryTimeout), 5000);
    assert_eq!(store.number(IntegerKey::MaxPacketsPerSecond), 25);
    assert_eq!(store.boolean(BooleanKey::StaminaSystem), false);
    assert_eq!(store.boolean(BooleanKey::ReplaceKickOnLogin), true);
    assert_eq!(store.float(FloatKey::RewardRateDamageDone), 1.5);

    assert_eq!(report.stage_origin, StageOrigin::Script);
    assert_eq!(report.stage_count, 5);
    assert_eq!(store.experience_stage(1), 7.0);
    assert_eq!(store.experience_stage(20), 6.0);
    assert_eq!(store.experience_stage(101), 3.0);
    assert_eq!(store.experience_stage(u32::MAX), 3.0);
}

#[test]
fn level_zero_falls_back_to_experience_rate() {
    let fixture = ConfigFixture::new();
    fixture.write_script(CONFIG_LUA);
    let mut store = fixture.store();
    store.load().expect("load");

    assert_eq!(store.experience_stage(0), 5.0);
}

#[test]
fn stage_file_replaces_script_stages() {
    let fixture = ConfigFixture::new();
    fixture.write_script(CONFIG_LUA).write_stages(
        r#"
        [config]
        enabled = true

        [[stage]]
        minlevel = 1
        maxlevel = 50
        multiplier = 2.0

        [[stage]]
        minlevel = 51
        maxlevel = 100
        multiplier = 3.0
        "#,
    );
    let mut store = fixture.store();

    let report = store.load().expect("load");

    assert_eq!(report.stage_origin, StageOrigin::Structured);
    assert_eq!(
        store.experience_stages().as_slice(),
        &[
            ExperienceStage::new(1, 50, 2.0),
            ExperienceStage::new(51, 100, 3.0),
        ]
    );
    assert_eq!(store.experience_stage(30), 2.0);
    assert_eq!(store.experience_stage(75), 3.0);
    assert_eq!(store.experience_stage(200), 5.0);
}

#[test]
fn stages_follow_stage_file_changes_across_reloads() {
    let fixture = ConfigFixture::new();
    fixture
        .write_script(CONFIG_LUA)
        .write_stages("[[stage]]\nminlevel = 1\nmultiplier = 10\n");
    let mut store = fixture.store();
    store.load().expect("load");
    assert_eq!(store.experience_stage(60), 10.0);

    fixture.remove_stages();
    let report = store.load().expect("reload");

    assert_eq!(report.stage_origin, StageOrigin::Script);
    assert_eq!(store.experience_stage(60), 4.0);
}

#[test]
fn database_host_is_fixed_after_first_load() {
    let fixture = ConfigFixture::new();
    fixture.write_script("mysqlHost = 'primary.db'\nallowChangeOutfit = false\n");
    let mut store = fixture.store();
    store.load().expect("load");

    fixture.write_script("mysqlHost = 'replica.db'\nallowChangeOutfit = true\n");
    store.load().expect("load");

    assert_eq!(store.string(StringKey::MysqlHost), "primary.db");
    assert_eq!(store.boolean(BooleanKey::AllowChangeOutfit), true);
}

#[test]
fn load_report_serializes_for_diagnostics() {
    let fixture = ConfigFixture::new();
    fixture.write_script(CONFIG_LUA);
    let mut store = fixture.store();

    let report = store.load().expect("load");
    let json = serde_json::to_value(report).expect("json");

    assert_eq!(json["stage_origin"], "script");
    assert_eq!(json["despawn"]["radius"], 50);
    assert_eq!(json["first_load"], true);
}
